//! Static presentation content: applicant identity, quiz questions, skills,
//! and case studies, bundled as a swappable content pack.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content pack: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("content pack has no quiz questions")]
    NoQuestions,
    #[error("question '{prompt}' needs exactly one correct option, found {found}")]
    AmbiguousAnswer { prompt: String, found: usize },
    #[error("content pack has no skills")]
    NoSkills,
    #[error("skill '{name}' has self score {score}, expected 0-100")]
    SelfScoreOutOfRange { name: String, score: u8 },
    #[error("content pack has no case studies")]
    NoCases,
    #[error("case study '{title}' has no steps")]
    EmptyCase { title: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub explanation: String,
    pub options: Vec<AnswerOption>,
}

impl QuizQuestion {
    pub fn correct_label(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.correct)
            .map(|option| option.label.as_str())
    }
}

/// A named competency: the applicant's fixed self-score plus the project
/// area it maps onto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub focus: String,
    pub self_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    pub title: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Relative path of the applicant photo shown on the welcome and quiz
    /// screens. The asset is optional at runtime; a missing file degrades
    /// to a placeholder in the GUI.
    pub photo_path: String,
}

/// One complete content configuration for the flow.
///
/// The built-in pack is the canonical one; alternative configurations can
/// be loaded from TOML without recompiling. Only loaded packs go through
/// [`ContentPack::validate`]; the built-in data is part of the crate and
/// covered by tests instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPack {
    // Scalar fields first so the pack also serializes cleanly to TOML.
    pub motivation: String,
    pub motivation_points: Vec<String>,
    pub applicant: ApplicantInfo,
    pub questions: Vec<QuizQuestion>,
    pub skills: Vec<Skill>,
    pub cases: Vec<CaseStudy>,
}

impl ContentPack {
    pub fn from_toml(raw: &str) -> Result<Self, ContentError> {
        let pack: ContentPack = toml::from_str(raw)?;
        pack.validate()?;
        Ok(pack)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.questions.is_empty() {
            return Err(ContentError::NoQuestions);
        }
        for question in &self.questions {
            let found = question.options.iter().filter(|o| o.correct).count();
            if found != 1 {
                return Err(ContentError::AmbiguousAnswer {
                    prompt: question.prompt.clone(),
                    found,
                });
            }
        }
        if self.skills.is_empty() {
            return Err(ContentError::NoSkills);
        }
        for skill in &self.skills {
            if skill.self_score > 100 {
                return Err(ContentError::SelfScoreOutOfRange {
                    name: skill.name.clone(),
                    score: skill.self_score,
                });
            }
        }
        if self.cases.is_empty() {
            return Err(ContentError::NoCases);
        }
        for case in &self.cases {
            if case.steps.is_empty() {
                return Err(ContentError::EmptyCase {
                    title: case.title.clone(),
                });
            }
        }
        Ok(())
    }

    /// The canonical built-in content set.
    pub fn builtin() -> Self {
        Self {
            applicant: ApplicantInfo {
                name: "Tanja Bartholdy".into(),
                phone: "0178 514 608 95".into(),
                email: "mail@bartholdy-qm.de".into(),
                photo_path: "assets/bewerberfoto.jpg".into(),
            },
            motivation: "Mit dem Schritt aus der Selbstständigkeit an die Hochschule \
                         Bielefeld möchte ich meine Expertise in ein innovatives Umfeld \
                         einbringen und im Team die praxisnahe Weiterentwicklung von \
                         Studienangeboten aktiv mitgestalten."
                .into(),
            motivation_points: vec![
                "Praxisnahe Curricula".into(),
                "Innovative Lehrformate".into(),
                "Qualität & Wirkung".into(),
            ],
            questions: vec![
                QuizQuestion {
                    prompt: "Wo habe ich die meiste Zeit gearbeitet?".into(),
                    options: vec![
                        AnswerOption {
                            label: "Hochschule/Universität".into(),
                            correct: true,
                        },
                        AnswerOption {
                            label: "Industrie".into(),
                            correct: false,
                        },
                        AnswerOption {
                            label: "KMU".into(),
                            correct: false,
                        },
                    ],
                    explanation: "Schwerpunkt in Lehre & Programmentwicklung – Verbindung \
                                  von Wissenschaft & Praxis."
                        .into(),
                },
                QuizQuestion {
                    prompt: "Welches Thema prägt meine Arbeit besonders?".into(),
                    options: vec![
                        AnswerOption {
                            label: "Prozess- & Qualitätsmanagement".into(),
                            correct: true,
                        },
                        AnswerOption {
                            label: "Event-Marketing".into(),
                            correct: false,
                        },
                        AnswerOption {
                            label: "Finanzprüfung".into(),
                            correct: false,
                        },
                    ],
                    explanation: "Praxisorientierte Qualität & kontinuierliche Verbesserung \
                                  in Bildungsprogrammen."
                        .into(),
                },
                QuizQuestion {
                    prompt: "Welche Kompetenz ist meine Stärke?".into(),
                    options: vec![
                        AnswerOption {
                            label: "Didaktik".into(),
                            correct: true,
                        },
                        AnswerOption {
                            label: "Finanzen".into(),
                            correct: false,
                        },
                        AnswerOption {
                            label: "Event-Planung".into(),
                            correct: false,
                        },
                    ],
                    explanation: "Didaktik prägt meine Lehrkonzepte und Programme.".into(),
                },
                QuizQuestion {
                    prompt: "Wo setze ich KI ein?".into(),
                    options: vec![
                        AnswerOption {
                            label: "Lernassistenz & Analytics".into(),
                            correct: true,
                        },
                        AnswerOption {
                            label: "Reisekostenabrechnung".into(),
                            correct: false,
                        },
                        AnswerOption {
                            label: "Event-Tickets".into(),
                            correct: false,
                        },
                    ],
                    explanation: "Ich nutze KI in EdTech-Prototypen zur Lernunterstützung."
                        .into(),
                },
            ],
            skills: vec![
                Skill {
                    name: "Didaktik".into(),
                    focus: "Projekt Lehrkonzepte".into(),
                    self_score: 80,
                },
                Skill {
                    name: "Digitalisierung".into(),
                    focus: "EdTech/AI Piloten".into(),
                    self_score: 70,
                },
                Skill {
                    name: "Qualitätsmanagement".into(),
                    focus: "Akkreditierung/QM".into(),
                    self_score: 85,
                },
                Skill {
                    name: "Prozessmanagement".into(),
                    focus: "Curriculum-Redesign".into(),
                    self_score: 75,
                },
                Skill {
                    name: "KI".into(),
                    focus: "Lernassistent/Analytics".into(),
                    self_score: 95,
                },
            ],
            cases: vec![
                CaseStudy {
                    title: "Flexibles, bausteinartiges Curriculum".into(),
                    steps: vec![
                        "Recherche – internationale Modelle, Microcredentials, rechtliche \
                         Vorgaben"
                            .into(),
                        "Analyse – Schnittstellen zwischen Studiengängen, Modulen, \
                         Weiterbildungen"
                            .into(),
                        "Konzeptentwicklung – Bausteinmodell (Module ↔ Microcredentials ↔ \
                         Weiterbildung)"
                            .into(),
                        "Pilotierung – Test in ausgewähltem Fachbereich, Feedback einholen"
                            .into(),
                        "Transfer & Skalierung – Anpassung, hochschulweite Einführung".into(),
                    ],
                },
                CaseStudy {
                    title: "Schnittstellenmanagement".into(),
                    steps: vec![
                        "Schnittstellen identifizieren".into(),
                        "Bedarfe analysieren (Studierende, Lernbegleitung)".into(),
                        "Koordination mit Projekten/Fachbereichen".into(),
                        "Integration von Curricula & Lernbegleitung".into(),
                        "Evaluation & Anpassung".into(),
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
