//! The project explorer records

use serde::Serialize;

/// One project card in the Projects panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub blurb: &'static str,
    pub tech: &'static str,
    /// Glyph shown next to the project name
    pub icon: &'static str,
}

impl Project {
    /// All projects, in display order
    pub fn all() -> &'static [Project] {
        &[
            Project {
                name: "Knowledge Mining Platform",
                blurb: "Unified platform with MCP Server and Agent for clinical data \
                    delivery with vector database",
                tech: "LangGraph, React Agent, OpenAI, Anthropic, FastAPI, AWS",
                icon: "🧠",
            },
            Project {
                name: "Clinical Trials Chatbot",
                blurb: "End-to-end chatbot for clinical researchers using RAG technique \
                    powered by AWS",
                tech: "AWS Kendra, SageMaker, FLAN-T5, LLAMA 2, Terraform",
                icon: "🏥",
            },
            Project {
                name: "ACCT Text-to-SQL Chatbot",
                blurb: "Converts natural language to SQL queries for AACT clinical \
                    trials database",
                tech: "LangGraph, MCP Server, OpenAI, Anthropic",
                icon: "🗄️",
            },
            Project {
                name: "Support Chatbot",
                blurb: "AI chatbot with knowledge base for infrastructure data access \
                    without DB expertise",
                tech: "LangChain, Vector DB, Claude 3, GPT-4, Flask",
                icon: "💬",
            },
            Project {
                name: "Predictive Quality Model",
                blurb: "Binary classification model to identify protocols likely to \
                    encounter quality events",
                tech: "Python, Scikit-learn, Pandas, NumPy",
                icon: "📊",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_projects() {
        assert_eq!(Project::all().len(), 5);
    }

    #[test]
    fn test_project_names_unique() {
        let names: Vec<_> = Project::all().iter().map(|p| p.name).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);
    }
}
