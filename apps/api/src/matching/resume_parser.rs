//! Resume parser: pulls contact details, skills, experience and education out of
//! plain resume text with keyword lists and regular expressions. No NLP model.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::interpreter::extract::contains_word;

// ────────────────────────────────────────────────────────────────────────────
// Keyword database
// ────────────────────────────────────────────────────────────────────────────

/// Skill keywords grouped by category. Canonical display names; matched
/// case-insensitively on word boundaries.
pub const SKILLS_DATABASE: &[&[&str]] = &[
    // Programming languages
    &[
        "Python", "JavaScript", "Java", "C++", "C#", "Ruby", "PHP", "Go", "Rust", "Swift",
        "Kotlin", "TypeScript", "Scala", "R", "MATLAB", "Perl", "Shell", "Bash",
    ],
    // Web technologies
    &[
        "HTML", "CSS", "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask",
        "Spring", "Laravel", "Rails", "Next.js", "Nuxt.js", "Svelte", "jQuery", "Bootstrap",
        "Tailwind", "Sass", "Less", "Webpack", "Vite", "Parcel",
    ],
    // Databases
    &[
        "MySQL", "PostgreSQL", "MongoDB", "Redis", "Elasticsearch", "SQLite", "Oracle",
        "SQL Server", "Cassandra", "DynamoDB", "Firebase", "Supabase", "Prisma",
    ],
    // Cloud platforms
    &[
        "AWS", "Azure", "GCP", "Google Cloud", "Heroku", "Vercel", "Netlify",
        "DigitalOcean", "Kubernetes", "Docker", "Terraform", "Ansible", "Jenkins",
        "GitLab CI", "GitHub Actions",
    ],
    // Data science
    &[
        "Pandas", "NumPy", "scikit-learn", "TensorFlow", "PyTorch", "Keras", "Matplotlib",
        "Seaborn", "Plotly", "Jupyter", "Tableau", "Power BI", "Spark", "Hadoop", "Airflow",
    ],
    // Soft skills
    &[
        "Leadership", "Communication", "Teamwork", "Problem Solving", "Project Management",
        "Agile", "Scrum", "Mentoring", "Collaboration", "Analytical Thinking", "Creativity",
    ],
];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?\(?(\d{3})\)?[-.\s]?(\d{3})[-.\s]?(\d{4})")
        .expect("phone pattern")
});

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/[\w-]+").expect("linkedin pattern"));

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)[0-9]{2}\b").expect("year pattern"));

// Titles and institutions never span a line break.
static TITLE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(?:senior|lead|principal|staff)[ \t]+(?:developer|engineer|manager|designer|analyst)\b",
        r"\b(?:software|web|frontend|backend|full.?stack)[ \t]+(?:developer|engineer)\b",
        r"\b(?:product|project|program)[ \t]+manager\b",
        r"\b(?:data|business)[ \t]+(?:scientist|analyst)\b",
        r"\b(?:ux|ui)[ \t]+designer\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("title pattern"))
    .collect()
});

static DEGREE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(?:bachelor|master|phd|doctorate|associate)\s*(?:of|in)?\s*(?:science|arts|engineering|business|computer)",
        r"\b(?:bs|ba|ms|ma|mba|phd)\b",
        r"\b(?:b\.s\.|b\.a\.|m\.s\.|m\.a\.|ph\.d\.)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("degree pattern"))
    .collect()
});

static INSTITUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:university|college|institute|school)[ \t]+of[ \t]+\w+|\w+[ \t]+(?:university|college|institute)\b",
    )
    .expect("institution pattern")
});

// ────────────────────────────────────────────────────────────────────────────
// Extraction results
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    /// Ten digits, country code and separators stripped.
    pub phone: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSummary {
    pub total_years: u32,
    pub positions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationSummary {
    pub degrees: Vec<String>,
    pub institutions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Extractors
// ────────────────────────────────────────────────────────────────────────────

pub fn extract_contact_info(text: &str) -> ContactInfo {
    let email = EMAIL_RE.find(text).map(|m| m.as_str().to_string());
    let phone = PHONE_RE
        .captures(text)
        .map(|c| format!("{}{}{}", &c[1], &c[2], &c[3]));
    let linkedin = LINKEDIN_RE
        .find(&text.to_lowercase())
        .map(|m| format!("https://{}", m.as_str()));

    ContactInfo {
        email,
        phone,
        linkedin,
    }
}

/// Skills from the database present in `text`, in database order, no duplicates.
pub fn extract_skills(text: &str) -> Vec<String> {
    SKILLS_DATABASE
        .iter()
        .flat_map(|category| category.iter())
        .filter(|skill| contains_word(text, skill))
        .map(|skill| skill.to_string())
        .collect()
}

/// Experience is estimated from the earliest 4-digit year mentioned.
pub fn extract_experience(text: &str, current_year: i32) -> ExperienceSummary {
    let earliest = YEAR_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .min();
    let total_years = earliest
        .map(|year| (current_year - year).max(0) as u32)
        .unwrap_or(0);

    let lower = text.to_lowercase();
    let positions = collect_unique(TITLE_RES.iter(), &lower);

    ExperienceSummary {
        total_years,
        positions,
    }
}

pub fn extract_education(text: &str) -> EducationSummary {
    let lower = text.to_lowercase();
    EducationSummary {
        degrees: collect_unique(DEGREE_RES.iter(), &lower),
        institutions: collect_unique(std::iter::once(&*INSTITUTION_RE), &lower),
    }
}

fn collect_unique<'a>(patterns: impl Iterator<Item = &'a Regex>, text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for pattern in patterns {
        for m in pattern.find_iter(text) {
            let value = title_case(m.as_str());
            if !found.contains(&value) {
                found.push(value);
            }
        }
    }
    found
}

/// "bachelor  of science" -> "Bachelor Of Science", "full-stack" -> "Full-Stack".
/// A letter is upper-cased when it does not follow another letter.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
            after_letter = false;
        }
        for c in word.chars() {
            if after_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            after_letter = c.is_alphabetic();
        }
    }
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE_RESUME: &str = r#"
        John Doe
        Senior Frontend Developer
        john.doe@email.com
        (555) 123-4567
        linkedin.com/in/johndoe

        EXPERIENCE
        Senior Frontend Developer at TechCorp (2020-Present)
        - Developed React applications using TypeScript and Next.js
        - Implemented GraphQL APIs and wrote comprehensive Jest tests
        - Led a team of 5 developers in agile environment

        Frontend Developer at StartupABC (2018-2020)
        - Built responsive web applications using React and JavaScript
        - Collaborated with design team on UI/UX improvements

        EDUCATION
        Bachelor of Science in Computer Science
        University of Technology (2014-2018)

        SKILLS
        React, TypeScript, Next.js, GraphQL, Jest, Node.js, HTML, CSS, JavaScript
    "#;

    #[test]
    fn test_contact_info_from_sample() {
        let contact = extract_contact_info(SAMPLE_RESUME);
        assert_eq!(contact.email.as_deref(), Some("john.doe@email.com"));
        assert_eq!(contact.phone.as_deref(), Some("5551234567"));
        assert_eq!(
            contact.linkedin.as_deref(),
            Some("https://linkedin.com/in/johndoe")
        );
    }

    #[test]
    fn test_contact_info_missing_fields_are_none() {
        let contact = extract_contact_info("No contact details here.");
        assert_eq!(contact, ContactInfo::default());
    }

    #[test]
    fn test_skills_from_sample() {
        let skills = extract_skills(SAMPLE_RESUME);
        for expected in ["React", "TypeScript", "Next.js", "Node.js", "JavaScript", "Agile"] {
            assert!(skills.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(!skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_skills_are_deduplicated() {
        let skills = extract_skills("React, react and REACT");
        assert_eq!(skills, vec!["React"]);
    }

    #[test]
    fn test_experience_from_earliest_year() {
        let experience = extract_experience(SAMPLE_RESUME, 2025);
        assert_eq!(experience.total_years, 11);
        assert_eq!(experience.positions, vec!["Frontend Developer"]);
    }

    #[test]
    fn test_experience_without_years_is_zero() {
        assert_eq!(extract_experience("Self-taught developer", 2025).total_years, 0);
    }

    #[test]
    fn test_future_year_does_not_underflow() {
        assert_eq!(extract_experience("Graduating 2030", 2025).total_years, 0);
    }

    #[test]
    fn test_title_case_capitalises_after_punctuation() {
        assert_eq!(title_case("full-stack  developer"), "Full-Stack Developer");
        assert_eq!(title_case("b.s."), "B.S.");
        assert_eq!(title_case("ph.d."), "Ph.D.");
    }

    #[test]
    fn test_hyphenated_title_and_dotted_degree() {
        let text = "Full-Stack Developer\nB.S. in Computer Science";
        assert_eq!(
            extract_experience(text, 2025).positions,
            vec!["Full-Stack Developer"]
        );
        assert!(extract_education(text)
            .degrees
            .contains(&"B.S.".to_string()));
    }

    #[test]
    fn test_non_ascii_digits_are_not_years() {
        assert_eq!(
            extract_experience("Since \u{0662}\u{0660}\u{0661}\u{0665}", 2025).total_years,
            0
        );
    }

    #[test]
    fn test_education_from_sample() {
        let education = extract_education(SAMPLE_RESUME);
        assert_eq!(education.degrees, vec!["Bachelor Of Science"]);
        assert_eq!(education.institutions, vec!["University Of Technology"]);
    }
}
