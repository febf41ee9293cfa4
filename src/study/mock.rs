// Mock content for offline mode
//
// Deterministic placeholders returned when no API key is configured. Same
// inputs always give the same output.

use super::types::{Difficulty, MatchingPair, Question, QuizSession, Section, StudyGuide};

fn bullets(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| format!("• {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<MatchingPair> {
    items
        .iter()
        .map(|(term, definition)| MatchingPair {
            term: term.to_string(),
            definition: definition.to_string(),
        })
        .collect()
}

/// Placeholder study guide with the three standard sections
pub fn mock_study_guide(topic: &str) -> StudyGuide {
    let anatomy = Section {
        title: "Anatomy & Structure".to_string(),
        foundational: format!(
            "{} anatomy essentials:\n{}",
            topic,
            bullets(&[
                "Basic embryological origin and development",
                "Gross anatomical landmarks and relationships",
                "Surface anatomy and clinical landmarks",
                "Normal anatomical variations",
                "Structural components and their functions",
                "Blood supply and innervation patterns",
                "Relationships to adjacent structures",
            ])
        ),
        clinical: format!(
            "Clinical correlations of {}:\n{}",
            topic,
            bullets(&[
                "Common pathologies affecting this structure",
                "Clinical presentations and symptoms",
                "Diagnostic approaches and imaging findings",
                "Treatment considerations",
                "Prognosis and complications",
                "Clinical correlations with anatomy",
                "Risk factors and prevention strategies",
            ])
        ),
        mermaid_chart: "graph TD\n    A[\"Structure Overview\"] --> B[\"Anatomy\"]\n    A --> C[\"Physiology\"]\n    B --> D[\"Clinical Relevance\"]\n    C --> D\n    D --> E[\"Treatment Approach\"]".to_string(),
        key_points: strings(&[
            "Key Point 1: This is an essential anatomical landmark with significant clinical importance",
            "Key Point 2: Understanding the normal anatomy is crucial for identifying pathology",
            "Key Point 3: Clinical examination must correlate with anatomical knowledge",
        ]),
        mnemonics: strings(&["Use the memory aid: Anatomy Always Applies in Clinical examination"]),
        matching_pairs: pairs(&[
            ("Structure A", "Primary component with specific function"),
            ("Structure B", "Adjacent anatomy providing support"),
            ("Clinical Finding", "Pathological sign associated with disease"),
        ]),
    };

    let physiology = Section {
        title: "Physiology & Function".to_string(),
        foundational: format!(
            "How {} works:\n{}",
            topic,
            bullets(&[
                "Normal physiological mechanisms",
                "Homeostatic regulation",
                "Neural and hormonal control",
                "Functional relationships",
                "Normal ranges and parameters",
                "Regulatory feedback systems",
                "Integration with other systems",
            ])
        ),
        clinical: format!(
            "When {} fails:\n{}",
            topic,
            bullets(&[
                "Dysfunction and pathophysiology",
                "Compensatory mechanisms",
                "Failure modes",
                "Clinical symptoms and signs",
                "Diagnostic testing",
                "Therapeutic interventions",
                "Outcome monitoring",
            ])
        ),
        mermaid_chart: "graph TD\n    A[\"Normal Function\"] --> B[\"Regulation\"]\n    B --> C[\"Homeostasis\"]\n    C --> D[\"System Integration\"]\n    D --> E[\"Clinical Outcomes\"]".to_string(),
        key_points: strings(&[
            "Key Point 1: Physiological understanding explains clinical presentations",
            "Key Point 2: Regulatory mechanisms maintain normal function",
            "Key Point 3: Pathophysiology underlies all disease states",
        ]),
        mnemonics: strings(&["Function Follows Form - understand anatomy to predict physiology"]),
        matching_pairs: pairs(&[
            ("Normal Value", "Expected physiological parameter"),
            ("Abnormal State", "Deviation from homeostasis"),
            ("Compensation", "Body's response to maintain function"),
        ]),
    };

    let clinical = Section {
        title: "Clinical Application".to_string(),
        foundational: format!(
            "Disease entities involving {}:\n{}",
            topic,
            bullets(&[
                "Common disease entities",
                "Epidemiology and risk factors",
                "Predisposing conditions",
                "Pathogenesis overview",
                "Natural history",
                "Classification systems",
                "Staging and grading",
            ])
        ),
        clinical: format!(
            "Managing {} pathology:\n{}",
            topic,
            bullets(&[
                "Clinical presentation patterns",
                "Diagnostic workup strategy",
                "Differential diagnosis",
                "Evidence-based management",
                "Pharmacological interventions",
                "Surgical options",
                "Follow-up and monitoring protocols",
            ])
        ),
        mermaid_chart: "graph TD\n    A[\"Patient Presentation\"] --> B[\"History & Exam\"]\n    B --> C[\"Investigations\"]\n    C --> D[\"Diagnosis\"]\n    D --> E[\"Treatment Plan\"]".to_string(),
        key_points: strings(&[
            "Key Point 1: Early recognition improves outcomes",
            "Key Point 2: Management depends on disease severity",
            "Key Point 3: Long-term follow-up prevents complications",
        ]),
        mnemonics: strings(&["Clinical Pearl: Always consider the patient's presentation in context"]),
        matching_pairs: pairs(&[
            ("Symptom", "Subjective complaint from patient"),
            ("Sign", "Objective finding on examination"),
            ("Syndrome", "Collection of related findings"),
        ]),
    };

    StudyGuide {
        topic: topic.to_string(),
        overview: format!(
            "{} is a fundamental concept in medical education. This comprehensive guide covers the essential anatomy, physiology, and clinical applications. Whether you're preparing for board exams or deepening your clinical knowledge, this module bridges foundational science with real-world clinical practice.",
            topic
        ),
        sections: vec![anatomy, physiology, clinical],
        related_topics: strings(&["Advanced Clinical Topics", "System-Based Integration"]),
    }
}

fn question(text: String, options: [&str; 4], explanation: &str) -> Question {
    Question {
        question: text,
        options: strings(&options),
        correct_answer: 0,
        explanation: explanation.to_string(),
    }
}

fn difficulty_questions(topic: &str, difficulty: Difficulty) -> [Question; 2] {
    match difficulty {
        Difficulty::Easy => [
            question(
                format!("What is the primary function of structures related to {}?", topic),
                [
                    "Option A - Correct function",
                    "Option B - Incorrect",
                    "Option C - Incorrect",
                    "Option D - Incorrect",
                ],
                "This is the correct answer because it accurately describes the primary physiological function. Understanding this basic function is essential for clinical practice.",
            ),
            question(
                format!("Which of the following is a normal anatomical finding in {}?", topic),
                [
                    "Finding A - Normal",
                    "Finding B - Abnormal",
                    "Finding C - Abnormal",
                    "Finding D - Abnormal",
                ],
                "This finding is within normal range. Being able to distinguish normal anatomy from pathology is crucial for interpreting clinical findings.",
            ),
        ],
        Difficulty::Medium => [
            question(
                format!(
                    "A 45-year-old patient presents with symptoms related to {}. What is the most likely diagnosis based on the clinical presentation?",
                    topic
                ),
                [
                    "Condition A - Most likely",
                    "Condition B - Less likely",
                    "Condition C - Rare",
                    "Condition D - Very rare",
                ],
                "Given the clinical presentation and epidemiology, this is the most common diagnosis. Understanding disease prevalence is important for clinical reasoning.",
            ),
            question(
                format!(
                    "Which imaging modality is most sensitive for detecting pathology in {}?",
                    topic
                ),
                [
                    "Modality A - Most sensitive",
                    "Modality B - Less sensitive",
                    "Modality C - Not useful",
                    "Modality D - Contraindicated",
                ],
                "This modality provides the best visualization and highest sensitivity for detecting abnormalities. Choosing appropriate diagnostic tests improves patient care.",
            ),
        ],
        Difficulty::Hard => [
            question(
                format!(
                    "A 52-year-old with complex medical history presents with atypical presentation of {} pathology. Which finding would most distinguish this from other similar conditions?",
                    topic
                ),
                [
                    "Finding A - Distinguishing",
                    "Finding B - Common to multiple",
                    "Finding C - Non-specific",
                    "Finding D - Artifact",
                ],
                "This finding is pathognomonic and distinguishes this condition from other similar entities. Higher-level reasoning requires recognizing subtle differentiating features.",
            ),
            question(
                format!(
                    "What is the most important mechanism for preventing complications in {} disease management?",
                    topic
                ),
                [
                    "Strategy A - Most important",
                    "Strategy B - Secondary",
                    "Strategy C - Tertiary",
                    "Strategy D - Not proven",
                ],
                "This prevention strategy addresses the underlying pathophysiology and prevents the most significant complications. Evidence-based medicine emphasizes early intervention.",
            ),
        ],
    }
}

/// Placeholder quiz: two difficulty-specific questions, then three generic ones
pub fn mock_quiz(topic: &str, difficulty: Difficulty) -> QuizSession {
    let mut questions: Vec<Question> = difficulty_questions(topic, difficulty).into();

    questions.push(question(
        format!(
            "How would you manage a patient with {} according to current clinical guidelines?",
            topic
        ),
        [
            "Approach A - Standard care",
            "Approach B - Alternative",
            "Approach C - Outdated",
            "Approach D - Contraindicated",
        ],
        "This represents current evidence-based practice. Staying updated with clinical guidelines ensures optimal patient outcomes.",
    ));
    questions.push(question(
        format!(
            "What is the expected prognosis with appropriate management of {} pathology?",
            topic
        ),
        [
            "Prognosis A - Good outcome",
            "Prognosis B - Fair outcome",
            "Prognosis C - Poor outcome",
            "Prognosis D - Unpredictable",
        ],
        "With appropriate management, most patients have favorable outcomes. Patient counseling about realistic expectations improves satisfaction.",
    ));
    questions.push(question(
        format!(
            "Which complication of {} is most common and clinically significant?",
            topic
        ),
        [
            "Complication A - Most significant",
            "Complication B - Less common",
            "Complication C - Rare",
            "Complication D - Very rare",
        ],
        "Recognizing common complications allows for proactive prevention and early detection, improving overall patient outcomes.",
    ));

    QuizSession { questions }
}
