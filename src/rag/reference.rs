// Annotated resume section snippets used to ground section parsing

/// (section name, example snippet) pairs covering common header variants,
/// including volunteering and a non-English heading
pub const SECTION_EXAMPLES: &[(&str, &str)] = &[
    ("summary", "SUMMARY: Software engineer with five years of Python and machine learning work."),
    ("summary", "Professional Profile: Data scientist focused on forecasting models."),
    ("experience", "WORK EXPERIENCE: Google, Mountain View - Software Engineer, 2020-Present. Built internal tools, led a team of four."),
    ("experience", "Career History: Amazon, Seattle - Developer, 2018-2020. Owned service testing and deployment."),
    ("volunteer", "VOLUNTEER EXPERIENCE: Red Cross - Coordinator, 2022. Organized donation drives."),
    ("volunteer", "Community Service: Local Shelter - Volunteer, 2021. Cared for rescued animals."),
    ("volunteer", "Freiwilligenarbeit: NGO - Ehrenamtlicher Helfer, 2023. Hilfsprojekte organisiert."),
    ("projects", "PROJECTS: Support chatbot - Built with PyTorch and FastAPI."),
    ("projects", "Portfolio: Web applications built with React and TypeScript."),
    ("achievements", "ACHIEVEMENTS: Employee of the Year 2024 - Company X."),
    ("achievements", "Awards and Honors: Hackathon winner, 2023."),
    ("education", "EDUCATION: Harvard University, 2015-2019. BS in Computer Science, GPA 3.8."),
    ("education", "Academic Background: MIT - MS in Artificial Intelligence, 2020-2022."),
    ("certifications", "CERTIFICATIONS: AWS Certified Developer - Associate, 2024."),
    ("certifications", "Licenses: Google Cloud Professional Architect, expires 2026."),
    ("skills", "SKILLS: Technical: Python, Java, SQL. Interests: AI, data science."),
    ("skills", "Competencies: Soft: leadership, mentoring. Hard: SQL, Docker."),
];
