//! Work history, education, and awards

use serde::Serialize;

/// A project delivered within a role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoleProject {
    pub name: &'static str,
    pub details: &'static str,
    pub tech: &'static str,
}

/// One employment entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub client: &'static str,
    pub period: &'static str,
    pub projects: &'static [RoleProject],
}

impl Role {
    /// Work history, most recent first
    pub fn all() -> &'static [Role] {
        &[
            Role {
                title: "AI Consultant",
                company: "Deloitte US",
                client: "Pfizer",
                period: "Dec 2024 - Present",
                projects: &[
                    RoleProject {
                        name: "Knowledge Mining Platform",
                        details: "Designed and developed a unified platform to deliver \
                            data from multiple clinical data sources. Built an MCP \
                            Server and Agent to consume live data streams and \
                            implemented a vector database for efficient retrieval. \
                            Deployed as FastAPI service on AWS.",
                        tech: "LangGraph Workflow, React Agent, OpenAI, Anthropic",
                    },
                    RoleProject {
                        name: "ACCT Chatbot (Text-to-SQL)",
                        details: "Designed Text-to-SQL chatbot converting natural \
                            language queries into SQL for AACT clinical trials \
                            database. Built MCP Server and Agent for secure, real-time \
                            database connectivity.",
                        tech: "LangGraph Workflow, React Agent, MCP Server, OpenAI, \
                            Anthropic",
                    },
                ],
            },
            Role {
                title: "AI & ML Engineer",
                company: "i2e Consulting",
                client: "Pfizer, Alexion",
                period: "Feb 2021 - Dec 2024",
                projects: &[
                    RoleProject {
                        name: "Clinical Trials Chatbot",
                        details: "Designed end-to-end chatbot to assist clinical \
                            researchers using RAG technique powered by AWS. \
                            Implemented CI/CD pipeline using Terraform scripts.",
                        tech: "AWS Kendra, Textract, SageMaker, FastAPI, Flan T5 XL, \
                            Llama 2",
                    },
                    RoleProject {
                        name: "Support Chatbot",
                        details: "Served as AI Architect designing chatbot's technical \
                            architecture. Created knowledge base for seamless \
                            infrastructure data access.",
                        tech: "LangChain, Vector DB, Flask, Claude 3 Sonnet, GPT-4",
                    },
                    RoleProject {
                        name: "Predictive Quality Event Model",
                        details: "Developed predictive binary classification model \
                            achieving 30% increase in protocol design success rates. \
                            Built ML-powered alert system for clinical trials.",
                        tech: "Python, Scikit-learn, Pandas, NumPy",
                    },
                ],
            },
        ]
    }
}

/// One education entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
}

impl Education {
    /// Degrees, most recent first
    pub fn all() -> &'static [Education] {
        &[
            Education {
                degree: "Master of Science in Data Science and Artificial Intelligence",
                institution: "Mumbai University",
            },
            Education {
                degree: "Bachelor of Mathematics",
                institution: "Mumbai University",
            },
        ]
    }
}

/// One award line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Award(pub &'static str);

impl Award {
    /// All awards
    pub fn all() -> &'static [Award] {
        &[
            Award("Employee of the Month - July 2021"),
            Award("Employee of the Month - Nov 2022"),
        ]
    }
}
