//! Skill and keyword vocabulary.
//!
//! The built-in tables below are plain static data. [`Vocabulary`] is the
//! compiled, immutable form the extractor works with: one [`AliasMatcher`]
//! per alias/keyword, built once and shared by reference.
//!
//! ## Invariants
//!
//! - Canonical skill names are non-empty and unique.
//! - Every skill has at least one alias; no alias or keyword is empty.
//!
//! Custom tables go through [`Vocabulary::new`], which enforces both.

use crate::extract::AliasMatcher;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use thiserror::Error;

static DEFAULT_VOCABULARY: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::new(SKILL_ALIASES, SENIORITY_KEYWORDS, ENTRY_KEYWORDS).expect("built-in vocabulary tables are valid")
});

/// Canonical skill name -> aliases, matched case-insensitively on word boundaries.
pub static SKILL_ALIASES: &[(&str, &[&str])] = &[
    ("Python", &["python"]),
    ("JavaScript", &["javascript", "js"]),
    ("TypeScript", &["typescript", "ts"]),
    ("Java", &["java"]),
    ("C", &["c"]),
    ("C++", &["c++", "cpp"]),
    ("C#", &["c#", "c sharp"]),
    ("Go", &["go", "golang"]),
    ("R", &["r"]),
    ("Ruby", &["ruby"]),
    ("PHP", &["php"]),
    ("Swift", &["swift"]),
    ("Kotlin", &["kotlin"]),
    ("Rust", &["rust"]),
    ("SQL", &["sql"]),
    ("PostgreSQL", &["postgresql", "postgres"]),
    ("MySQL", &["mysql"]),
    ("SQLite", &["sqlite"]),
    ("MongoDB", &["mongodb", "mongo"]),
    ("Redis", &["redis"]),
    ("Elasticsearch", &["elasticsearch", "elastic search"]),
    ("DynamoDB", &["dynamodb"]),
    ("AWS", &["aws", "amazon web services"]),
    ("Azure", &["azure"]),
    ("GCP", &["gcp", "google cloud"]),
    ("Docker", &["docker"]),
    ("Kubernetes", &["kubernetes", "k8s"]),
    ("Linux", &["linux"]),
    ("Git", &["git"]),
    ("REST", &["rest", "restful"]),
    ("GraphQL", &["graphql"]),
    ("React", &["react", "react.js", "reactjs"]),
    ("Vue", &["vue", "vue.js", "vuejs"]),
    ("Angular", &["angular", "angularjs"]),
    ("Node.js", &["node.js", "nodejs"]),
    ("Django", &["django"]),
    ("Flask", &["flask"]),
    ("FastAPI", &["fastapi"]),
    ("Spring", &["spring", "spring boot", "springboot"]),
    ("Express", &["express", "express.js", "expressjs"]),
    ("Pandas", &["pandas"]),
    ("NumPy", &["numpy"]),
    ("Scikit-learn", &["scikit-learn", "sklearn"]),
    ("TensorFlow", &["tensorflow"]),
    ("PyTorch", &["pytorch"]),
    ("CI/CD", &["ci/cd", "ci cd", "cicd"]),
    ("Jenkins", &["jenkins"]),
    ("Terraform", &["terraform"]),
    ("Ansible", &["ansible"]),
    ("Kafka", &["kafka"]),
    ("RabbitMQ", &["rabbitmq"]),
    ("Spark", &["spark", "apache spark"]),
    ("Hadoop", &["hadoop"]),
    ("Airflow", &["airflow", "apache airflow"]),
    ("ETL", &["etl"]),
    ("Tableau", &["tableau"]),
    ("Power BI", &["power bi", "powerbi"]),
    ("Excel", &["excel"]),
    ("Selenium", &["selenium"]),
];

/// Keywords that mark a role as senior. Order decides report order.
pub static SENIORITY_KEYWORDS: &[&str] =
    &["senior", "staff", "principal", "lead", "manager", "director", "head of", "architect"];

/// Keywords that mark a role as open to beginners. Order decides report order.
pub static ENTRY_KEYWORDS: &[&str] =
    &["entry level", "entry-level", "junior", "jr", "jr.", "graduate", "new grad", "intern", "apprentice", "trainee"];

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("skill table contains an empty canonical name")]
    EmptyCanonical,

    #[error("duplicate canonical skill name: {0}")]
    DuplicateCanonical(String),

    #[error("skill {0} has no aliases")]
    NoAliases(String),

    #[error("empty alias or keyword in {0}")]
    EmptyAlias(String),

    #[error("failed to compile matcher: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug)]
pub(crate) struct SkillEntry {
    pub canonical: String,
    pub matchers: Vec<AliasMatcher>,
}

/// Compiled, read-only skill and keyword tables.
#[derive(Debug)]
pub struct Vocabulary {
    skills: Vec<SkillEntry>,
    seniority: Vec<AliasMatcher>,
    entry: Vec<AliasMatcher>,
}

impl Vocabulary {
    /// Validate and compile a vocabulary.
    pub fn new(
        skills: &[(&str, &[&str])],
        seniority: &[&str],
        entry: &[&str],
    ) -> Result<Self, VocabularyError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(skills.len());

        for (canonical, aliases) in skills {
            if canonical.is_empty() {
                return Err(VocabularyError::EmptyCanonical);
            }
            if !seen.insert(*canonical) {
                return Err(VocabularyError::DuplicateCanonical(canonical.to_string()));
            }
            if aliases.is_empty() {
                return Err(VocabularyError::NoAliases(canonical.to_string()));
            }
            let matchers = compile_all(aliases, canonical)?;
            entries.push(SkillEntry { canonical: canonical.to_string(), matchers });
        }

        Ok(Vocabulary {
            skills: entries,
            seniority: compile_all(seniority, "seniority keywords")?,
            entry: compile_all(entry, "entry keywords")?,
        })
    }

    /// The built-in tables, compiled on first use.
    pub fn builtin() -> &'static Vocabulary {
        &DEFAULT_VOCABULARY
    }

    /// Canonical skill names in table order.
    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.canonical.as_str())
    }

    pub(crate) fn skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    pub(crate) fn seniority(&self) -> &[AliasMatcher] {
        &self.seniority
    }

    pub(crate) fn entry(&self) -> &[AliasMatcher] {
        &self.entry
    }
}

fn compile_all(aliases: &[&str], owner: &str) -> Result<Vec<AliasMatcher>, VocabularyError> {
    aliases
        .iter()
        .map(|alias| {
            if alias.is_empty() {
                return Err(VocabularyError::EmptyAlias(owner.to_string()));
            }
            Ok(AliasMatcher::new(alias)?)
        })
        .collect()
}
