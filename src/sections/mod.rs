//! Section classification
//!
//! Header-like lines of a resume or job posting are matched against
//! prototype embeddings, one per section label. Each document kind has its
//! own closed label enum, so a misspelt label cannot exist.
//!
//! Components:
//! - Taxonomy: `ResumeSection` / `JobSection` and their example phrases
//! - Prototypes: mean phrase embedding per label
//! - Classifier: header detection and section content extraction

pub mod taxonomy;
pub mod prototypes;
pub mod classifier;

pub use taxonomy::{JobSection, ResumeSection, SectionLabel};
pub use prototypes::PrototypeSet;
pub use classifier::{ExtractedSections, SectionClassifier, SectionKey};
