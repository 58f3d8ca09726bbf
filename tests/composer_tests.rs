// Interview prompt composition
//
// Every role/level pair must compose, and fragments must appear in the fixed order.

use vapi_console::interview::{
    company_fragment, compose_instructions, duration_fragment, interview_assistant,
    role_fragment, CompanyType, InterviewDuration, InterviewSettings, Level, Role, GUIDELINES,
};
use vapi_console::{Model, Voice};

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("missing fragment: {}", needle))
}

#[test]
fn test_all_role_level_pairs_compose_in_order() {
    for role in Role::ALL {
        for level in Level::ALL {
            for company in CompanyType::ALL {
                for duration in InterviewDuration::ALL {
                    let settings = InterviewSettings {
                        role: *role,
                        level: *level,
                        duration: *duration,
                        company: *company,
                    };
                    let text = compose_instructions(&settings, "Rust and Kubernetes");

                    let r = position(&text, role_fragment(*role, *level));
                    let c = position(&text, company_fragment(*company));
                    let d = position(&text, duration_fragment(*duration));
                    let j = position(&text, "Rust and Kubernetes");

                    assert!(r < c && c < d && d < j, "out of order for {:?}", settings);
                }
            }
        }
    }
}

#[test]
fn test_mid_level_software_engineer_scenario() {
    let settings = InterviewSettings::from_keys(
        "software_engineer",
        "mid_level",
        "30_minutes",
        "enterprise",
    )
    .unwrap();

    let text = compose_instructions(&settings, "");

    let role = role_fragment(Role::SoftwareEngineer, Level::MidLevel);
    assert!(text.starts_with(role));

    let company = position(&text, company_fragment(CompanyType::Enterprise));
    let duration = position(&text, duration_fragment(InterviewDuration::ThirtyMinutes));
    let no_context = position(&text, "No additional context provided.");
    assert!(role.len() < company);
    assert!(company < duration);
    assert!(duration < no_context);

    let mut last = no_context;
    for (i, guideline) in GUIDELINES.iter().enumerate() {
        let numbered = format!("{}. {}", i + 1, guideline);
        let at = position(&text, &numbered);
        assert!(at > last, "guideline {} out of order", i + 1);
        last = at;
    }
}

#[test]
fn test_whitespace_job_description_counts_as_empty() {
    let text = compose_instructions(&InterviewSettings::default(), "  \n ");
    assert!(text.contains("Additional context about the position: No additional context provided."));
}

#[test]
fn test_job_description_replaces_placeholder() {
    let text = compose_instructions(&InterviewSettings::default(), "Senior backend role");
    assert!(text.contains("Additional context about the position: Senior backend role"));
    assert!(!text.contains("No additional context provided."));
}

#[test]
fn test_unknown_keys_fail_fast() {
    assert!(InterviewSettings::from_keys("astronaut", "mid_level", "30_minutes", "startup").is_err());
    assert!(InterviewSettings::from_keys("sales", "mid_level", "90_minutes", "startup").is_err());

    let err = InterviewSettings::from_keys("sales", "guru", "30_minutes", "startup").unwrap_err();
    assert!(err.to_string().contains("guru"));
}

#[test]
fn test_interview_assistant_fixed_fields() {
    let settings = InterviewSettings {
        role: Role::DataScientist,
        ..InterviewSettings::default()
    };

    let assistant = interview_assistant(&settings, "");

    assert_eq!(
        assistant.first_message,
        "Hello, I'll be conducting your interview today for the data scientist position. Let's get started with the first question."
    );
    assert_eq!(assistant.model, Model::Gpt4o);
    assert_eq!(assistant.voice, Voice::JenniferPlayht);
    assert!(assistant.recording_enabled);
    assert!(!assistant.interruptions_enabled);
    assert!(assistant
        .context
        .starts_with(role_fragment(Role::DataScientist, Level::MidLevel)));
}
