// src/services/assessment.rs

//! Assessment scoring and recommendation engine.
//!
//! `evaluate` folds an [`AnswerSet`] into a five-bucket [`ScoreVector`],
//! picks the dominant [`PersonalityType`] and attaches the fixed
//! recommendations, skills breakdown and action plan for that type.
//! The whole computation is pure; persistence is the caller's business.

use serde::Serialize;

use crate::models::assessment::{
    ActionStep, AnswerSet, AssessmentOutcome, CareerRecommendation, SkillAssessment,
};

/// The five score buckets, in enumeration order. Ties resolve to the
/// earliest variant, so the order of `ALL` is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityType {
    Technical,
    Creative,
    Social,
    Analytical,
    Business,
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 5] = [
        PersonalityType::Technical,
        PersonalityType::Creative,
        PersonalityType::Social,
        PersonalityType::Analytical,
        PersonalityType::Business,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PersonalityType::Technical => "technical",
            PersonalityType::Creative => "creative",
            PersonalityType::Social => "social",
            PersonalityType::Analytical => "analytical",
            PersonalityType::Business => "business",
        }
    }

    /// Skill label reported for this bucket in the skills analysis.
    pub fn skill_name(self) -> &'static str {
        match self {
            PersonalityType::Technical => "Technical Skills",
            PersonalityType::Creative => "Creative Thinking",
            PersonalityType::Social => "Communication",
            PersonalityType::Analytical => "Analytical Thinking",
            PersonalityType::Business => "Leadership",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            PersonalityType::Technical => {
                "You have a strong analytical mind and enjoy working with technology, systems, and data. \
                 You prefer structured environments where you can solve complex problems using logical thinking."
            }
            PersonalityType::Creative => {
                "You are imaginative and innovative, with a natural talent for artistic expression and creative problem-solving. \
                 You thrive in environments that allow for creative freedom and expression."
            }
            PersonalityType::Social => {
                "You are people-oriented and excel at communication, collaboration, and helping others. \
                 You enjoy working in teams and making a positive impact on people's lives."
            }
            PersonalityType::Analytical => {
                "You have excellent problem-solving skills and enjoy analyzing data, patterns, and systems. \
                 You prefer work that requires critical thinking and logical reasoning."
            }
            PersonalityType::Business => {
                "You are goal-oriented and have strong leadership potential. \
                 You enjoy strategic thinking, managing resources, and achieving measurable results."
            }
        }
    }
}

/// Bucket increments contributed by one recognized answer token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketDelta {
    pub technical: u32,
    pub creative: u32,
    pub social: u32,
    pub analytical: u32,
    pub business: u32,
}

impl BucketDelta {
    const ZERO: BucketDelta = BucketDelta {
        technical: 0,
        creative: 0,
        social: 0,
        analytical: 0,
        business: 0,
    };
}

/// Token groups and what each token in the group adds. Matching is exact.
pub const CLASSIFICATION_TABLE: &[(&[&str], BucketDelta)] = &[
    (
        &["science", "math", "technology", "analytical", "technical"],
        BucketDelta {
            technical: 2,
            analytical: 1,
            ..BucketDelta::ZERO
        },
    ),
    (
        &["arts", "creative", "design"],
        BucketDelta {
            creative: 2,
            ..BucketDelta::ZERO
        },
    ),
    (
        &["social", "communication", "team", "human"],
        BucketDelta {
            social: 2,
            ..BucketDelta::ZERO
        },
    ),
    (
        &["commerce", "business", "money", "lead"],
        BucketDelta {
            business: 2,
            ..BucketDelta::ZERO
        },
    ),
];

/// Looks a token up in the classification table. Unknown tokens score nothing.
pub fn classify(token: &str) -> Option<BucketDelta> {
    CLASSIFICATION_TABLE
        .iter()
        .find(|(tokens, _)| tokens.contains(&token))
        .map(|(_, delta)| *delta)
}

/// Per-bucket accumulators. Unsigned, so never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreVector {
    pub technical: u32,
    pub creative: u32,
    pub social: u32,
    pub analytical: u32,
    pub business: u32,
}

impl ScoreVector {
    pub fn get(&self, bucket: PersonalityType) -> u32 {
        match bucket {
            PersonalityType::Technical => self.technical,
            PersonalityType::Creative => self.creative,
            PersonalityType::Social => self.social,
            PersonalityType::Analytical => self.analytical,
            PersonalityType::Business => self.business,
        }
    }

    fn apply(&mut self, delta: BucketDelta) {
        self.technical = self.technical.saturating_add(delta.technical);
        self.creative = self.creative.saturating_add(delta.creative);
        self.social = self.social.saturating_add(delta.social);
        self.analytical = self.analytical.saturating_add(delta.analytical);
        self.business = self.business.saturating_add(delta.business);
    }

    pub fn total(&self) -> u32 {
        PersonalityType::ALL.iter().map(|b| self.get(*b)).sum()
    }

    /// Bucket with the highest score; the first in enumeration order wins a tie,
    /// so an all-zero vector is `Technical`.
    pub fn dominant(&self) -> PersonalityType {
        let mut best = PersonalityType::ALL[0];
        for bucket in PersonalityType::ALL.iter().skip(1) {
            if self.get(*bucket) > self.get(best) {
                best = *bucket;
            }
        }
        best
    }
}

/// Commutative fold of every answer value through the classification table.
pub fn score_answers(answers: &AnswerSet) -> ScoreVector {
    answers
        .values()
        .filter_map(|value| classify(value))
        .fold(ScoreVector::default(), |mut scores, delta| {
            scores.apply(delta);
            scores
        })
}

/// level = min(100, score * 10); stars = ceil(level / 20).
pub fn skill_level(score: u32) -> (u32, u32) {
    let level = score.saturating_mul(10).min(100);
    let stars = level.div_ceil(20);
    (level, stars)
}

pub fn skills_analysis(scores: &ScoreVector) -> Vec<SkillAssessment> {
    PersonalityType::ALL
        .iter()
        .map(|bucket| {
            let (level, stars) = skill_level(scores.get(*bucket));
            SkillAssessment {
                name: bucket.skill_name().to_string(),
                level,
                stars,
            }
        })
        .collect()
}

type RecommendationRow = (&'static str, u8, &'static str);

fn recommendation_table(kind: PersonalityType) -> &'static [RecommendationRow; 4] {
    match kind {
        PersonalityType::Technical => &[
            ("Software Engineer", 95, "Develop software applications and systems"),
            ("Data Scientist", 90, "Analyze and interpret complex data"),
            ("Mechanical Engineer", 85, "Design and build mechanical systems"),
            ("Network Administrator", 80, "Manage computer networks and systems"),
        ],
        PersonalityType::Creative => &[
            ("Graphic Designer", 95, "Create visual designs and artwork"),
            ("Content Writer", 90, "Write engaging content for various platforms"),
            ("UI/UX Designer", 85, "Design user interfaces and experiences"),
            ("Marketing Specialist", 80, "Create marketing campaigns and strategies"),
        ],
        PersonalityType::Social => &[
            ("Teacher", 95, "Educate and inspire students"),
            ("Human Resources Manager", 90, "Manage people and workplace culture"),
            ("Counselor", 85, "Help people with personal and professional issues"),
            ("Sales Representative", 80, "Build relationships and sell products"),
        ],
        PersonalityType::Analytical => &[
            ("Research Analyst", 95, "Conduct research and analyze data"),
            ("Financial Analyst", 90, "Analyze financial data and trends"),
            ("Management Consultant", 85, "Solve business problems and improve processes"),
            ("Statistician", 80, "Collect and analyze statistical data"),
        ],
        PersonalityType::Business => &[
            ("Business Manager", 95, "Lead and manage business operations"),
            ("Entrepreneur", 90, "Start and run your own business"),
            ("Project Manager", 85, "Plan and execute projects"),
            ("Marketing Manager", 80, "Develop and implement marketing strategies"),
        ],
    }
}

pub fn career_recommendations(kind: PersonalityType) -> Vec<CareerRecommendation> {
    recommendation_table(kind)
        .iter()
        .map(|(career, score, description)| CareerRecommendation {
            career: career.to_string(),
            score: *score,
            description: description.to_string(),
        })
        .collect()
}

type PlanRow = (&'static str, &'static str);

fn plan_table(kind: PersonalityType) -> &'static [PlanRow; 4] {
    match kind {
        PersonalityType::Technical => &[
            ("Learn Programming", "Start with Python or JavaScript to build technical skills"),
            ("Get Certified", "Obtain relevant certifications in your chosen technical field"),
            ("Build Projects", "Create a portfolio of technical projects to showcase your skills"),
            ("Network", "Join technical communities and attend industry events"),
        ],
        PersonalityType::Creative => &[
            ("Build Portfolio", "Create a portfolio showcasing your creative work"),
            ("Learn Tools", "Master industry-standard creative software and tools"),
            ("Take Courses", "Enroll in creative design or art courses"),
            ("Freelance", "Start with freelance projects to gain experience"),
        ],
        PersonalityType::Social => &[
            ("Volunteer", "Volunteer in community organizations to build people skills"),
            ("Get Certified", "Obtain relevant certifications in counseling or HR"),
            ("Practice Communication", "Join public speaking clubs or take communication courses"),
            ("Gain Experience", "Seek internships or entry-level positions in people-oriented roles"),
        ],
        PersonalityType::Analytical => &[
            ("Learn Analytics", "Study data analysis tools and statistical methods"),
            ("Get Certified", "Obtain certifications in data analysis or research methods"),
            ("Practice Analysis", "Work on real-world analytical problems and case studies"),
            ("Specialize", "Choose a specific field for analytical expertise"),
        ],
        PersonalityType::Business => &[
            ("Study Business", "Learn business fundamentals and management principles"),
            ("Get Experience", "Seek internships or entry-level positions in business"),
            ("Network", "Build professional relationships in the business community"),
            ("Develop Leadership", "Take on leadership roles in projects or organizations"),
        ],
    }
}

pub fn action_plan(kind: PersonalityType) -> Vec<ActionStep> {
    plan_table(kind)
        .iter()
        .zip(1u32..)
        .map(|((title, description), step)| ActionStep {
            step,
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Scores an answer set and builds the full result payload.
pub fn evaluate(answers: &AnswerSet) -> AssessmentOutcome {
    let scores = score_answers(answers);
    let kind = scores.dominant();

    AssessmentOutcome {
        personality_type: kind.as_str().to_string(),
        personality_summary: kind.summary().to_string(),
        career_recommendations: career_recommendations(kind),
        skills_analysis: skills_analysis(&scores),
        action_plan: action_plan(kind),
    }
}
