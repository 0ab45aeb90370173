use serde::{Deserialize, Serialize};

/// Analysis of the candidate's own resume, as presented by the resume analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProfile {
    pub overall_score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub keywords: Vec<String>,
    pub industry_match: String,
    pub improvement_areas: Vec<String>,
}

impl ResumeProfile {
    pub fn sample() -> Self {
        Self {
            overall_score: 85,
            strengths: strings(&[
                "Strong technical skills in React and TypeScript",
                "Clear project descriptions with measurable outcomes",
                "Good use of action verbs and quantifiable results",
                "Professional formatting and structure",
            ]),
            weaknesses: strings(&[
                "Could benefit from more industry-specific keywords",
                "Some experience descriptions are too brief",
                "Skills section could be better organized by category",
            ]),
            suggestions: strings(&[
                "Add more industry-specific keywords for ATS optimization",
                "Expand on key project achievements with metrics",
                "Group skills by category (Frontend, Backend, Tools)",
                "Include a professional summary at the top",
                "Add certifications if available",
            ]),
            skills: strings(&[
                "React",
                "TypeScript",
                "Node.js",
                "MongoDB",
                "AWS",
                "Docker",
                "Git",
                "Agile",
            ]),
            experience: "5 years".to_string(),
            education: "Bachelor's in Computer Science".to_string(),
            keywords: strings(&[
                "frontend development",
                "react",
                "typescript",
                "web applications",
                "user experience",
            ]),
            industry_match: "Technology/Software Development".to_string(),
            improvement_areas: strings(&[
                "ATS Optimization",
                "Keyword Density",
                "Achievement Quantification",
            ]),
        }
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
