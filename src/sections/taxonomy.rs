// Section label taxonomies for resumes and job postings
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A closed set of section labels for one document kind
pub trait SectionLabel:
    Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static
{
    /// Every label, in declaration order. Ties in classification resolve to
    /// the label listed first.
    const ALL: &'static [Self];

    /// Stable lowercase name used in metadata and section maps
    fn as_str(&self) -> &'static str;

    /// Hand-authored header phrases whose mean embedding forms the prototype
    fn example_phrases(&self) -> &'static [&'static str];
}

/// Sections of a resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeSection {
    Experience,
    Education,
    Skills,
    Summary,
    Projects,
    Certifications,
    Achievements,
    Contact,
}

/// Sections of a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSection {
    Responsibilities,
    Requirements,
    Preferred,
    Company,
    Benefits,
    Application,
}

impl SectionLabel for ResumeSection {
    const ALL: &'static [Self] = &[
        ResumeSection::Experience,
        ResumeSection::Education,
        ResumeSection::Skills,
        ResumeSection::Summary,
        ResumeSection::Projects,
        ResumeSection::Certifications,
        ResumeSection::Achievements,
        ResumeSection::Contact,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ResumeSection::Experience => "experience",
            ResumeSection::Education => "education",
            ResumeSection::Skills => "skills",
            ResumeSection::Summary => "summary",
            ResumeSection::Projects => "projects",
            ResumeSection::Certifications => "certifications",
            ResumeSection::Achievements => "achievements",
            ResumeSection::Contact => "contact",
        }
    }

    fn example_phrases(&self) -> &'static [&'static str] {
        match self {
            ResumeSection::Experience => &[
                "Experience",
                "Work Experience",
                "Professional Experience",
                "Employment History",
                "Career History",
                "Work History",
            ],
            ResumeSection::Education => &[
                "Education",
                "Academic Background",
                "Academic History",
                "Degrees",
                "Education and Training",
            ],
            ResumeSection::Skills => &[
                "Skills",
                "Technical Skills",
                "Core Competencies",
                "Competencies",
                "Key Skills",
            ],
            ResumeSection::Summary => &[
                "Summary",
                "Professional Summary",
                "Profile",
                "Objective",
                "About Me",
                "Career Overview",
            ],
            ResumeSection::Projects => &[
                "Projects",
                "Personal Projects",
                "Portfolio",
                "Key Projects",
            ],
            ResumeSection::Certifications => &[
                "Certifications",
                "Certificates",
                "Licenses",
                "Licenses and Certifications",
            ],
            ResumeSection::Achievements => &[
                "Achievements",
                "Accomplishments",
                "Awards",
                "Honors and Awards",
            ],
            ResumeSection::Contact => &[
                "Contact",
                "Contact Information",
                "Personal Information",
                "Personal Details",
            ],
        }
    }
}

impl SectionLabel for JobSection {
    const ALL: &'static [Self] = &[
        JobSection::Responsibilities,
        JobSection::Requirements,
        JobSection::Preferred,
        JobSection::Company,
        JobSection::Benefits,
        JobSection::Application,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            JobSection::Responsibilities => "responsibilities",
            JobSection::Requirements => "requirements",
            JobSection::Preferred => "preferred",
            JobSection::Company => "company",
            JobSection::Benefits => "benefits",
            JobSection::Application => "application",
        }
    }

    fn example_phrases(&self) -> &'static [&'static str] {
        match self {
            JobSection::Responsibilities => &[
                "Responsibilities",
                "Key Responsibilities",
                "Duties",
                "What You Will Do",
                "Your Role",
            ],
            JobSection::Requirements => &[
                "Requirements",
                "Required Qualifications",
                "Minimum Qualifications",
                "What You Bring",
                "Must Have",
            ],
            JobSection::Preferred => &[
                "Preferred",
                "Preferred Qualifications",
                "Nice to Have",
                "Bonus Points",
            ],
            JobSection::Company => &[
                "About Us",
                "About the Company",
                "Who We Are",
                "Company Overview",
            ],
            JobSection::Benefits => &[
                "Benefits",
                "Perks",
                "What We Offer",
                "Compensation and Benefits",
            ],
            JobSection::Application => &[
                "How to Apply",
                "Application Process",
                "Apply Now",
                "Next Steps",
            ],
        }
    }
}

impl fmt::Display for ResumeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JobSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
