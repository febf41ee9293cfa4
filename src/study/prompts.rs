// Prompt templates and system instructions

use super::types::Difficulty;

pub const STUDY_GUIDE_SYSTEM_INSTRUCTION: &str = "You are a world-class medical educator specializing in Gross Anatomy and Clinical Pathology. Your goal is to make complex topics 'stick' using high-yield facts, visual flowcharts (Mermaid.js), and active recall games.";

pub fn study_guide_prompt(topic: &str) -> String {
    format!(
        r#"
Create a high-yield Clinical Anatomy and Medical review guide for: "{topic}".

The goal is to help doctors maximize retention of complex anatomical and physiological concepts by bridging "Basic Science" with "Clinical Relevance".
Avoid dense walls of text. Use bullet points or short paragraphs where possible.

For each sub-section (e.g., if topic is Heart: Coronary Blood Supply, Valves, Conduction System), provide:
1. Foundational: Detailed anatomy, embryology, or physiology (First Year level). **CRITICAL:** Include Surface Anatomy & Landmarks.
2. Clinical: The "Third Year" application. What goes wrong? (e.g., specific infarct territories, nerve palsies).
3. Mermaid Chart: A visual flowchart (graph TD) to represent the flow, pathway, or hierarchy. **IMPORTANT:** Enclose all text inside node brackets [] with double quotes. Example: A["Left (L)"] --> B["Right (R)"].
4. Key Points: 2-3 rapid-fire facts.
5. Mnemonics: A specific memory aid.
6. Matching Pairs: 3-4 pairs for active recall.

Also provide a brief, high-level overview of the topic and 2 "Next Step" related topics for a predictive study pathway.
"#
    )
}

pub fn quiz_prompt(topic: &str, difficulty: Difficulty) -> String {
    let focus = match difficulty {
        Difficulty::Hard => "Third-order reasoning and obscure presentations",
        Difficulty::Easy | Difficulty::Medium => "Foundational concepts",
    };

    format!(
        "Generate 5 USMLE Step 1/Step 2 CK style clinical vignette questions regarding: {topic}.\n\
         Difficulty Level: {difficulty}.\n\n\
         Focus on:\n\
         1. Clinical anatomy correlations.\n\
         2. Differentiating similar pathologies.\n\
         3. {focus}.\n"
    )
}

pub fn anatomy_image_prompt(topic: &str, section: &str) -> String {
    format!(
        "Detailed medical anatomical diagram of {section} in the context of {topic}. \
         Clean, professional textbook style illustration. White background. \
         Clearly labeled structures. High resolution, educational."
    )
}

pub fn tutor_system_instruction(topic: &str) -> String {
    format!(
        "You are an expert medical tutor helping a student study \"{topic}\".\n\
         Your goal is to explain complex concepts simply, provide analogies, and answer questions accurately.\n\
         Use the Google Search tool to find up-to-date information, clinical guidelines, or recent papers if the user asks about them or if standard knowledge might be outdated.\n\
         Always cite your sources if you use the search tool.\n\
         If the user asks for images, describe them vividly or explain that you can generate diagrams in the main study view, but for now, you can provide detailed text explanations and search links."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_prompt_focus_by_difficulty() {
        let hard = quiz_prompt("Heart", Difficulty::Hard);
        assert!(hard.contains("Difficulty Level: Hard"));
        assert!(hard.contains("Third-order reasoning"));

        let easy = quiz_prompt("Heart", Difficulty::Easy);
        assert!(easy.contains("Foundational concepts"));
        assert!(!easy.contains("Third-order"));
    }

    #[test]
    fn test_prompts_mention_topic() {
        assert!(study_guide_prompt("Brachial Plexus").contains("\"Brachial Plexus\""));
        assert!(anatomy_image_prompt("Heart", "Valves").contains("Valves in the context of Heart"));
        assert!(tutor_system_instruction("Kidney").contains("expert medical tutor"));
    }
}
