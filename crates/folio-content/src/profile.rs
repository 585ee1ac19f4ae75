//! The profile card: who this portfolio belongs to

use serde::Serialize;

/// A labelled group of skills
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: &'static str,
}

/// The owner's profile as shown in the About panel and browser pages
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    /// Long-form About Me paragraphs, in reading order
    pub about: &'static [&'static str],
    pub skills: &'static [SkillGroup],
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub site: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

impl Profile {
    /// The canonical profile
    pub fn standard() -> Self {
        Self {
            name: "Aakash Yadav",
            headline: "AI Engineer",
            summary: "Innovative and results-driven AI Engineer with around 4 years of \
                experience in developing and deploying machine learning models, \
                particularly in natural language processing and large language models \
                (LLMs). Proven track record of improving operational efficiency and \
                predictive accuracy through advanced AI solutions.",
            about: &[
                "I never imagined I would end up in software development. Growing up, \
                 I was the kid who genuinely enjoyed solving math problems - not because \
                 I had to, but because there was something deeply satisfying about \
                 finding elegant solutions to complex puzzles.",
                "It wasn't until later that I discovered the world of computer science - \
                 and more importantly, that people who love problem-solving often thrive \
                 in this field. Here was a discipline that rewarded the same analytical \
                 thinking I had always enjoyed, but with the added satisfaction of \
                 building things that actually worked.",
                "When it came time to choose a specialization, AI was the natural \
                 choice. The field sits at the intersection of mathematics, statistics, \
                 and computer science - essentially applied mathematics with the power \
                 to create intelligent systems.",
                "Today, I get to work on some of the most exciting challenges in \
                 technology - from building RAG-powered chatbots to designing LLM-based \
                 agents. Every project is a new puzzle to solve.",
            ],
            skills: &[
                SkillGroup {
                    label: "LLM Models",
                    items: "Claude 3.5, GPT-4, LLAMA 2, Mistral, FLAN-T5",
                },
                SkillGroup {
                    label: "NLP",
                    items: "LangChain, LangGraph, Hugging Face, RAG, Prompt Engineering",
                },
                SkillGroup {
                    label: "Cloud",
                    items: "AWS (SageMaker, Kendra, Lambda), Azure OpenAI",
                },
                SkillGroup {
                    label: "ML/DL",
                    items: "PyTorch, Scikit-learn, Pandas, NumPy",
                },
                SkillGroup {
                    label: "Tools",
                    items: "Docker, FastAPI, Flask, Git, Claude Code, Cursor",
                },
            ],
            email: "aakash27.2000@gmail.com",
            phone: "+91 7506444919",
            location: "Mumbai, India",
            site: "https://aakashyadav.dev",
            linkedin: "https://linkedin.com",
            github: "https://github.com",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_has_content() {
        let p = Profile::standard();

        assert_eq!(p.name, "Aakash Yadav");
        assert_eq!(p.skills.len(), 5);
        assert!(!p.about.is_empty());
        assert!(p.email.contains('@'));
    }

    #[test]
    fn test_profile_serializes() {
        let p = Profile::standard();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("AI Engineer"));
    }
}
