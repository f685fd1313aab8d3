use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One tile in the technology-stack grid. The icon is a devicon class name
/// resolved by the icon font; the color is emitted as a CSS custom property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechEntry {
    pub icon: String,
    pub name: String,
    pub description: String,
    pub color: String,
}

/// One entry in the project showcase. `id` is list identity only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub github: String,
    pub live: String,
}

/// The technology stack, rendered in this order.
pub static TECH_STACK: LazyLock<Vec<TechEntry>> = LazyLock::new(|| {
    vec![
        TechEntry {
            icon: "devicon-java-plain".to_string(),
            name: "Java".to_string(),
            description: "Enterprise-level backend development with Spring Framework".to_string(),
            color: "#007396".to_string(),
        },
        TechEntry {
            icon: "devicon-react-original".to_string(),
            name: "React".to_string(),
            description: "Modern frontend development with hooks and context".to_string(),
            color: "#61DAFB".to_string(),
        },
        TechEntry {
            icon: "devicon-python-plain".to_string(),
            name: "Python".to_string(),
            description: "Backend development with Flask and Django frameworks".to_string(),
            color: "#3776AB".to_string(),
        },
        TechEntry {
            icon: "devicon-mysql-plain".to_string(),
            name: "MySQL".to_string(),
            description: "Relational database design and optimization".to_string(),
            color: "#4479A1".to_string(),
        },
        TechEntry {
            icon: "devicon-spring-plain".to_string(),
            name: "Spring Boot".to_string(),
            description: "Rapid application development with Spring ecosystem".to_string(),
            color: "#6DB33F".to_string(),
        },
        TechEntry {
            icon: "devicon-docker-plain".to_string(),
            name: "Docker".to_string(),
            description: "Containerization and microservices deployment".to_string(),
            color: "#2496ED".to_string(),
        },
    ]
});

/// Featured projects, rendered in this order.
pub static FEATURED_PROJECTS: LazyLock<Vec<ProjectEntry>> = LazyLock::new(|| {
    vec![
        ProjectEntry {
            id: 1,
            title: "E-Commerce Platform".to_string(),
            description: "Full-stack e-commerce solution with Spring Boot and React".to_string(),
            technologies: vec![
                "Java".to_string(),
                "Spring Boot".to_string(),
                "React".to_string(),
                "MySQL".to_string(),
                "Docker".to_string(),
            ],
            image: "/images/project-ecommerce.jpg".to_string(),
            github: "https://github.com/username/project1".to_string(),
            live: "https://project1.com".to_string(),
        },
        ProjectEntry {
            id: 2,
            title: "Task Management System".to_string(),
            description: "Collaborative project management with real-time updates".to_string(),
            technologies: vec![
                "Java".to_string(),
                "Spring Boot".to_string(),
                "React".to_string(),
                "WebSocket".to_string(),
                "Redis".to_string(),
            ],
            image: "/images/project-tasks.jpg".to_string(),
            github: "https://github.com/username/project2".to_string(),
            live: "https://project2.com".to_string(),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_stack_order() {
        let names = TECH_STACK
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            ["Java", "React", "Python", "MySQL", "Spring Boot", "Docker"]
        );
    }

    #[test]
    fn test_tech_entries_fully_populated() {
        for entry in TECH_STACK.iter() {
            assert!(!entry.icon.is_empty());
            assert!(!entry.name.is_empty());
            assert!(!entry.description.is_empty());
            assert!(
                entry.color.starts_with('#') && entry.color.len() == 7,
                "unexpected color {}",
                entry.color
            );
        }
    }

    #[test]
    fn test_project_ids_unique() {
        let mut ids = FEATURED_PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FEATURED_PROJECTS.len());
    }

    #[test]
    fn test_project_entries_fully_populated() {
        for project in FEATURED_PROJECTS.iter() {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.technologies.is_empty());
            assert!(!project.image.is_empty());
            assert!(project.github.starts_with("https://"));
            assert!(project.live.starts_with("https://"));
        }
    }
}
