//! Lexical keyword and skill extraction
//!
//! Cheap, embedding-free signals that complement retrieval when comparing a
//! resume against a job posting.

use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

use regex::Regex;

/// Upper bound on keywords returned by [`extract_keywords`]
pub const MAX_KEYWORDS: usize = 50;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "under", "between", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "should", "could", "can", "may", "might", "must",
    "shall", "this", "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "me",
    "him", "her", "us", "them",
];

const TECHNICAL_SKILLS: &[&str] = &[
    "python", "java", "javascript", "sql", "html", "css", "react", "angular", "vue", "node.js",
    "express", "django", "flask", "spring", "mongodb", "postgresql", "mysql", "redis", "docker",
    "kubernetes", "aws", "azure", "gcp", "git", "jenkins", "terraform", "ansible", "linux",
    "windows", "api", "rest", "graphql", "microservices", "devops", "ci/cd", "agile", "scrum",
    "machine learning", "artificial intelligence", "data science", "tensorflow", "pytorch",
    "pandas", "numpy", "scikit-learn", "tableau", "power bi", "excel", "r", "matlab",
];

const SOFT_SKILLS: &[&str] = &[
    "communication", "leadership", "teamwork", "problem solving", "analytical", "creative",
    "adaptable", "detail-oriented", "organized", "time management", "project management",
    "customer service", "presentation", "negotiation", "strategic thinking", "innovation",
    "collaboration", "mentoring", "coaching",
];

const TECHNOLOGY_FAMILIES: &[&str] = &[
    r"\b(?:python|java|javascript|typescript|c\+\+|c#|php|ruby|go|rust|swift|kotlin)\b",
    r"\b(?:react|angular|vue|node\.?js|express|django|flask|spring|laravel)\b",
    r"\b(?:aws|azure|gcp|docker|kubernetes|jenkins|terraform|ansible)\b",
    r"\b(?:sql|mysql|postgresql|mongodb|redis|elasticsearch|cassandra)\b",
];

fn non_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("static pattern"))
}

fn skill_patterns() -> &'static [(&'static str, Regex)] {
    static RE: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RE.get_or_init(|| {
        TECHNICAL_SKILLS
            .iter()
            .chain(SOFT_SKILLS.iter())
            .map(|skill| {
                let pattern = format!(r"\b{}\b", regex::escape(skill));
                (*skill, Regex::new(&pattern).expect("escaped skill pattern"))
            })
            .collect()
    })
}

fn technology_patterns() -> &'static [Regex] {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        TECHNOLOGY_FAMILIES
            .iter()
            .map(|p| Regex::new(p).expect("static pattern"))
            .collect()
    })
}

/// Unigrams, bigrams and trigrams worth matching on, in order of first
/// appearance, at most [`MAX_KEYWORDS`].
///
/// Unigrams must be longer than 2 characters and not stop words; bigrams
/// longer than 5 and trigrams longer than 8. Purely numeric entries are
/// dropped.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = non_word().replace_all(&lowered, " ");
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    let stop: HashSet<&str> = STOP_WORDS.iter().copied().collect();

    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    let mut push = |candidate: String| {
        if candidate.chars().all(|c| c.is_ascii_digit()) {
            return;
        }
        if seen.insert(candidate.clone()) {
            keywords.push(candidate);
        }
    };

    for word in &words {
        if word.chars().count() > 2 && !stop.contains(word) {
            push(word.to_string());
        }
    }

    for i in 0..words.len().saturating_sub(1) {
        let bigram = words[i..i + 2].join(" ");
        if bigram.chars().count() > 5 {
            push(bigram);
        }
        if i + 3 <= words.len() {
            let trigram = words[i..i + 3].join(" ");
            if trigram.chars().count() > 8 {
                push(trigram);
            }
        }
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Known technical and soft skills mentioned in `text`, sorted and unique
pub fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut found = BTreeSet::new();

    for (skill, pattern) in skill_patterns() {
        if pattern.is_match(&lowered) {
            found.insert(skill.to_string());
        }
    }

    for pattern in technology_patterns() {
        for m in pattern.find_iter(&lowered) {
            found.insert(m.as_str().to_string());
        }
    }

    found.into_iter().collect()
}

/// Skills required by `job_text` that `resume_text` also mentions
pub fn matching_skills(resume_text: &str, job_text: &str) -> Vec<String> {
    let resume: BTreeSet<String> = extract_skills(resume_text).into_iter().collect();
    extract_skills(job_text)
        .into_iter()
        .filter(|skill| resume.contains(skill))
        .collect()
}
