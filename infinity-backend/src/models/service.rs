use serde::{Deserialize, Serialize};

/// A catalog entry shown on the public services listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Seed data for the services table
#[derive(Debug, Clone, Copy)]
pub struct NewService {
    pub title: &'static str,
    pub description: &'static str,
}

/// Services inserted on first startup against an empty database
pub const DEFAULT_SERVICES: &[NewService] = &[
    NewService {
        title: "Web Development",
        description: "Fast, responsive websites and web applications built to scale.",
    },
    NewService {
        title: "Mobile App Development",
        description: "Native and cross-platform apps for iOS and Android.",
    },
    NewService {
        title: "Cloud Solutions",
        description: "Deployment, hosting and infrastructure on modern cloud platforms.",
    },
    NewService {
        title: "UI/UX Design",
        description: "Clean, user-focused interfaces designed from wireframe to launch.",
    },
];
