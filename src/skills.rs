//! Immutable skill-category catalog.
//!
//! A mapping from category name to canonical skill strings, loaded once
//! at first use and passed around by reference. The calling layer uses
//! it to label extracted resume skills; the selector only consumes the
//! flat skill strings themselves.

use std::collections::BTreeMap;
use std::sync::OnceLock;

static CATALOG: OnceLock<SkillCatalog> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct SkillCatalog {
    categories: BTreeMap<&'static str, Vec<&'static str>>,
}

impl SkillCatalog {
    /// Process-wide catalog instance.
    pub fn global() -> &'static SkillCatalog {
        CATALOG.get_or_init(SkillCatalog::builtin)
    }

    fn builtin() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            "Core CS",
            vec![
                "Algorithms", "Data Structures", "Operating Systems", "Computer Networks",
                "Distributed Systems", "Concurrency", "Multithreading", "Memory Management",
                "Compiler Design", "System Design", "Recursion", "Dynamic Programming",
                "Hash Tables", "Graphs", "Trees", "Sorting", "Mutex", "Deadlock", "Semaphores",
                "Garbage Collection", "C", "C++", "Java", "Python", "Go", "Rust", "Linux",
                "TCP/IP", "HTTP", "Design Patterns",
            ],
        );
        categories.insert(
            "Web Dev",
            vec![
                "HTML", "CSS", "JavaScript", "TypeScript", "React", "Angular", "Vue.js",
                "Node.js", "Express.js", "Django", "Flask", "FastAPI", "Spring Boot",
                "REST API", "GraphQL", "gRPC", "WebSockets", "OAuth", "JWT", "Nginx",
                "Next.js", "Tailwind CSS", "Webpack", "Jest",
            ],
        );
        categories.insert(
            "AI/ML/DS",
            vec![
                "Machine Learning", "Deep Learning", "Natural Language Processing",
                "Computer Vision", "Neural Networks", "TensorFlow", "PyTorch",
                "Scikit-learn", "Pandas", "NumPy", "Feature Engineering", "Regression",
                "Classification", "Clustering", "Transformers", "Reinforcement Learning",
                "Data Visualization", "SQL", "Embeddings", "Fine-tuning",
            ],
        );
        categories.insert(
            "Cyber Security",
            vec![
                "Network Security", "Cryptography", "Penetration Testing", "OWASP",
                "SQL Injection", "Cross-Site Scripting", "Authentication", "Authorization",
                "Firewalls", "TLS", "Incident Response", "Threat Modeling", "SIEM",
                "Zero Trust", "Vulnerability Assessment",
            ],
        );
        categories.insert(
            "DB/Cloud/DevOps",
            vec![
                "PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch", "Kafka",
                "RabbitMQ", "Docker", "Kubernetes", "Terraform", "Ansible", "AWS", "Azure",
                "GCP", "CI/CD", "Jenkins", "GitHub Actions", "Prometheus", "Grafana",
                "Serverless", "Git",
            ],
        );
        categories.insert(
            "Mobile Development",
            vec![
                "iOS", "Android", "Swift", "SwiftUI", "Kotlin", "React Native", "Flutter",
                "Dart", "Jetpack Compose", "Core Data", "Push Notifications", "MVVM",
            ],
        );
        categories.insert(
            "Embedded Systems/IoT",
            vec![
                "Embedded C", "RTOS", "FreeRTOS", "Firmware", "Microcontroller", "FPGA",
                "Arduino", "Raspberry Pi", "MQTT", "SPI", "I2C", "UART", "Bare Metal",
            ],
        );
        Self { categories }
    }

    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &[&'static str])> + '_ {
        self.categories.iter().map(|(name, skills)| (*name, skills.as_slice()))
    }

    /// Group a flat skill list under the catalog's category names.
    /// Matching is case-insensitive; unknown skills are simply absent
    /// from the result.
    pub fn categorize(&self, skills: &[String]) -> BTreeMap<&'static str, Vec<&'static str>> {
        let lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

        let mut categorized = BTreeMap::new();
        for (category, canonical) in &self.categories {
            let matched: Vec<&'static str> = canonical
                .iter()
                .filter(|skill| lowered.iter().any(|s| s == &skill.to_lowercase()))
                .copied()
                .collect();
            if !matched.is_empty() {
                categorized.insert(*category, matched);
            }
        }
        categorized
    }
}
