// Bundled sample portfolio
//
// Ships as the default content so the app renders something real out of
// the box. `folio content --init` writes this to disk as a starting point
// for customization.

use super::{
    AboutContent, ContactDetails, PersonalInfo, Portfolio, Project, Skill, SkillGroup, SocialLink,
    StatTile, TimelineEntry,
};

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            personal: PersonalInfo {
                name: "Rowan Ellis".to_string(),
                greeting: "Hi, I'm".to_string(),
                roles: vec![
                    "Systems Engineer".to_string(),
                    "Backend Developer".to_string(),
                    "Open Source Contributor".to_string(),
                ],
                summary: "Software engineer focused on reliable backend systems, \
                          developer tooling, and the occasional terminal UI. I like \
                          making complicated infrastructure feel boring."
                    .to_string(),
            },
            about: AboutContent {
                role_title: "Systems Engineer & Toolsmith".to_string(),
                paragraphs: vec![
                    "I build and operate backend services, with a soft spot for the \
                     tooling around them: build systems, observability, and the CLIs \
                     nobody thanks you for until they break."
                        .to_string(),
                    "Most of my recent work has been in Rust and Go - event pipelines, \
                     storage plumbing, and terminal interfaces for operations teams. \
                     Before that I spent years in Python data infrastructure."
                        .to_string(),
                    "Outside of work I maintain a couple of small open source \
                     libraries and write up the odd postmortem of bugs that deserved \
                     better."
                        .to_string(),
                ],
                stats: vec![
                    StatTile {
                        label: "Years".to_string(),
                        value: "8+".to_string(),
                    },
                    StatTile {
                        label: "Projects".to_string(),
                        value: "20+".to_string(),
                    },
                    StatTile {
                        label: "OSS libs".to_string(),
                        value: "4".to_string(),
                    },
                ],
            },
            education: vec![
                TimelineEntry {
                    period: "2012 - 2016".to_string(),
                    title: "BSc Computer Science".to_string(),
                    organization: "University of Edinburgh".to_string(),
                    description: "Focused on distributed systems and compilers. \
                                  Dissertation on consistency trade-offs in \
                                  gossip-based replication."
                        .to_string(),
                },
                TimelineEntry {
                    period: "2016 - 2017".to_string(),
                    title: "MSc Software Engineering".to_string(),
                    organization: "University of Edinburgh".to_string(),
                    description: "Graduate work on program analysis and build \
                                  reproducibility, with a side of far too much LaTeX."
                        .to_string(),
                },
            ],
            experience: vec![
                TimelineEntry {
                    period: "2021 - Present".to_string(),
                    title: "Senior Systems Engineer".to_string(),
                    organization: "Fernwood Labs".to_string(),
                    description: "Own the event ingestion pipeline (Rust, Kafka) and \
                                  the internal operations TUI. Cut p99 ingest latency \
                                  by 60% and deleted more code than I wrote."
                        .to_string(),
                },
                TimelineEntry {
                    period: "2018 - 2021".to_string(),
                    title: "Backend Developer".to_string(),
                    organization: "Harbourline".to_string(),
                    description: "Built billing and reconciliation services in Go. \
                                  Introduced structured logging and tracing across \
                                  the platform."
                        .to_string(),
                },
                TimelineEntry {
                    period: "2016 - 2018".to_string(),
                    title: "Data Infrastructure Engineer".to_string(),
                    organization: "Skylark Analytics".to_string(),
                    description: "Kept a Python ETL fleet alive and eventually \
                                  replaced the worst of it with something that could \
                                  be restarted without a runbook."
                        .to_string(),
                },
            ],
            skills: vec![
                SkillGroup {
                    title: "Languages & Tools".to_string(),
                    skills: vec![
                        Skill {
                            name: "Rust".to_string(),
                            level: 92,
                        },
                        Skill {
                            name: "Go".to_string(),
                            level: 85,
                        },
                        Skill {
                            name: "Python".to_string(),
                            level: 80,
                        },
                        Skill {
                            name: "SQL & PostgreSQL".to_string(),
                            level: 78,
                        },
                        Skill {
                            name: "Git & CI".to_string(),
                            level: 88,
                        },
                    ],
                },
                SkillGroup {
                    title: "Systems & Infrastructure".to_string(),
                    skills: vec![
                        Skill {
                            name: "Event pipelines & Kafka".to_string(),
                            level: 90,
                        },
                        Skill {
                            name: "Observability & tracing".to_string(),
                            level: 86,
                        },
                        Skill {
                            name: "Kubernetes".to_string(),
                            level: 72,
                        },
                        Skill {
                            name: "Terminal UIs".to_string(),
                            level: 84,
                        },
                    ],
                },
            ],
            projects: vec![
                Project {
                    title: "driftwatch".to_string(),
                    description: "Config drift detector for fleets of services: \
                                  diffs the deployed world against declared state \
                                  and renders the damage in a TUI dashboard."
                        .to_string(),
                    tech: vec![
                        "Rust".to_string(),
                        "ratatui".to_string(),
                        "tokio".to_string(),
                    ],
                    link: None,
                    source: Some("https://github.com/rowanellis/driftwatch".to_string()),
                },
                Project {
                    title: "ledgerline".to_string(),
                    description: "Double-entry reconciliation engine with pluggable \
                                  matchers and an audit trail you can actually read."
                        .to_string(),
                    tech: vec!["Go".to_string(), "PostgreSQL".to_string()],
                    link: Some("https://ledgerline.dev".to_string()),
                    source: Some("https://github.com/rowanellis/ledgerline".to_string()),
                },
                Project {
                    title: "gossipvis".to_string(),
                    description: "Interactive visualizer for gossip protocol \
                                  convergence, born out of a dissertation and kept \
                                  alive out of stubbornness."
                        .to_string(),
                    tech: vec!["Rust".to_string(), "WebAssembly".to_string()],
                    link: None,
                    source: Some("https://github.com/rowanellis/gossipvis".to_string()),
                },
                Project {
                    title: "tracetidy".to_string(),
                    description: "CLI that prunes and re-roots noisy distributed \
                                  traces so the interesting span is on the first \
                                  screen, not the fourth."
                        .to_string(),
                    tech: vec!["Rust".to_string(), "OpenTelemetry".to_string()],
                    link: None,
                    source: Some("https://github.com/rowanellis/tracetidy".to_string()),
                },
            ],
            contact: ContactDetails {
                email: "rowan@rowanellis.dev".to_string(),
                phone: "+44 7700 900 123".to_string(),
                location: "Edinburgh, Scotland".to_string(),
            },
            social: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/rowanellis".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/rowan-ellis-dev/".to_string(),
                },
            ],
        }
    }
}
