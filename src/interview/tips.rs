use super::options::Role;
use serde::Serialize;

/// Preparation advice shown before an interview starts
#[derive(Debug, Clone, Serialize)]
pub struct PreparationTips {
    pub title: &'static str,
    pub focus_heading: &'static str,
    pub focus: &'static str,
    pub common_questions: &'static [&'static str],
    pub questions_to_ask: &'static [&'static str],
}

static SOFTWARE_ENGINEERING: PreparationTips = PreparationTips {
    title: "Software Engineering Interview Tips",
    focus_heading: "Technical Preparation",
    focus: "Review data structures, algorithms, system design, and coding fundamentals relevant to your level.",
    common_questions: &[
        "Explain a challenging technical problem you've solved",
        "How do you approach debugging a complex issue?",
        "Describe your experience with [relevant technologies]",
        "How do you stay updated with the latest developments in software engineering?",
    ],
    questions_to_ask: &[
        "What does the development process look like?",
        "How is code reviewed in the team?",
        "What are the biggest technical challenges the team is facing?",
    ],
};

static DATA_SCIENCE: PreparationTips = PreparationTips {
    title: "Data Science Interview Tips",
    focus_heading: "Technical Preparation",
    focus: "Review statistics, machine learning algorithms, feature engineering, and data manipulation techniques.",
    common_questions: &[
        "Describe a data science project you've worked on from start to finish",
        "How do you validate your models?",
        "How do you handle missing or imbalanced data?",
        "Explain a complex concept to a non-technical stakeholder",
    ],
    questions_to_ask: &[
        "What data infrastructure is in place?",
        "How is data science integrated with the product development process?",
        "What metrics matter most to the business?",
    ],
};

static PRODUCT_MANAGEMENT: PreparationTips = PreparationTips {
    title: "Product Management Interview Tips",
    focus_heading: "Preparation",
    focus: "Review product development processes, prioritization frameworks, and metrics analysis.",
    common_questions: &[
        "How do you prioritize features?",
        "Describe a product you launched from concept to completion",
        "How do you gather and incorporate user feedback?",
        "Tell me about a time you had to make a difficult product decision",
    ],
    questions_to_ask: &[
        "How is product success measured?",
        "How do product, design, and engineering collaborate?",
        "What's the product development process like?",
    ],
};

static GENERAL: PreparationTips = PreparationTips {
    title: "Interview Tips",
    focus_heading: "General Preparation",
    focus: "Research the company, prepare your elevator pitch, and review your experience relevant to the role.",
    common_questions: &[
        "Tell me about yourself",
        "Why are you interested in this role?",
        "Describe a challenging situation and how you handled it",
        "What are your strengths and weaknesses?",
    ],
    questions_to_ask: &[
        "What does success look like in this role?",
        "How would you describe the company culture?",
        "What are the biggest challenges facing the team right now?",
    ],
};

/// Advice shown while an interview is running
pub const IN_PROGRESS_TIPS: [&str; 5] = [
    "Speak clearly and at a moderate pace",
    "Use specific examples from your experience",
    "Structure your answers using the STAR method (Situation, Task, Action, Result)",
    "Ask clarifying questions if needed",
    "Be authentic in your responses",
];

pub fn preparation_tips(role: Role) -> &'static PreparationTips {
    match role {
        Role::SoftwareEngineer => &SOFTWARE_ENGINEERING,
        Role::DataScientist => &DATA_SCIENCE,
        Role::ProductManager => &PRODUCT_MANAGEMENT,
        Role::Marketing | Role::Sales | Role::CustomerService => &GENERAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_without_dedicated_tips_fall_back_to_general() {
        assert_eq!(preparation_tips(Role::Sales).title, "Interview Tips");
        assert_eq!(
            preparation_tips(Role::DataScientist).title,
            "Data Science Interview Tips"
        );
    }
}
