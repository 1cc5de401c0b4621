use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;

use crate::domain::DomainError;
use crate::infrastructure::SeaOrmAuthorRepository;
use crate::models::news;
use crate::services::{AuthorService, CreateAuthorRequest};

struct DemoAuthor {
    name: &'static str,
    bio: &'static str,
    independent: bool,
    email: &'static str,
    headline: &'static str,
}

const DEMO_AUTHORS: &[DemoAuthor] = &[
    DemoAuthor {
        name: "Ana Souza",
        bio: "Investigative reporter covering city hall.",
        independent: true,
        email: "ana@example.com",
        headline: "Budget hearing runs late",
    },
    DemoAuthor {
        name: "Bruno Lima",
        bio: "Science desk editor.",
        independent: false,
        email: "bruno@example.com",
        headline: "New telescope images released",
    },
];

/// Create the demo authors through the author service, then attach one
/// news item to each. Emails that already exist are skipped.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    let service = AuthorService::new(Arc::new(SeaOrmAuthorRepository::new(db.clone())));
    let existing: Vec<String> = service.list().await?.into_iter().map(|a| a.email).collect();

    for demo in DEMO_AUTHORS {
        if existing.iter().any(|email| email == demo.email) {
            continue;
        }

        let author = service
            .create(CreateAuthorRequest {
                name: Some(demo.name.to_owned()),
                bio: Some(demo.bio.to_owned()),
                independent: Some(demo.independent),
                email: Some(demo.email.to_owned()),
                password: Some("changeme".to_owned()),
            })
            .await?;

        // News belongs to another service; demo rows are written straight to the table
        let now = chrono::Utc::now().to_rfc3339();
        news::ActiveModel {
            title: Set(demo.headline.to_owned()),
            content: Set(None),
            author_id: Set(author.id),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
