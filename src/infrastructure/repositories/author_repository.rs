//! SeaORM implementation of AuthorRepository
#![allow(clippy::needless_update)] // SeaORM ActiveModels require ..Default::default()

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, Value,
};

use crate::domain::{Author, AuthorChanges, AuthorRepository, DomainError, NewAuthor, NewsItem};
use crate::models::author::{self, ActiveModel, Column, Entity as AuthorEntity};
use crate::models::news::{self, Entity as NewsEntity};

/// SeaORM-based implementation of AuthorRepository
pub struct SeaOrmAuthorRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// The password column is dropped here and nowhere else
fn to_author(model: author::Model, news: Vec<news::Model>) -> Author {
    Author {
        id: model.id,
        name: model.name,
        bio: model.bio,
        independent: model.independent,
        email: model.email,
        created_at: model.created_at,
        updated_at: model.updated_at,
        news: news.into_iter().map(to_news_item).collect(),
    }
}

fn to_news_item(model: news::Model) -> NewsItem {
    NewsItem {
        id: model.id,
        title: model.title,
        content: model.content,
        author_id: model.author_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn set_or_skip<T>(value: Option<T>) -> sea_orm::ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    match value {
        Some(v) => Set(v),
        None => NotSet,
    }
}

#[async_trait]
impl AuthorRepository for SeaOrmAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, DomainError> {
        let authors = AuthorEntity::find()
            .order_by_asc(Column::Id)
            .find_with_related(NewsEntity)
            .all(&self.db)
            .await?;

        Ok(authors
            .into_iter()
            .map(|(author, news)| to_author(author, news))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DomainError> {
        let author = AuthorEntity::find_by_id(id)
            .find_with_related(NewsEntity)
            .all(&self.db)
            .await?
            .into_iter()
            .next();

        Ok(author.map(|(author, news)| to_author(author, news)))
    }

    async fn create(&self, input: NewAuthor) -> Result<Author, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        // Absent fields stay NotSet so the table constraints reject them
        let author = ActiveModel {
            name: set_or_skip(input.name),
            bio: set_or_skip(input.bio.map(Some)),
            independent: set_or_skip(input.independent),
            email: set_or_skip(input.email),
            password: Set(input.password_hash),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = author.insert(&self.db).await?;

        // A brand new author cannot have news yet
        Ok(to_author(result, Vec::new()))
    }

    async fn update_where(&self, id: i32, changes: AuthorChanges) -> Result<u64, DomainError> {
        let mut update = AuthorEntity::update_many().col_expr(
            Column::UpdatedAt,
            Expr::value(Value::from(chrono::Utc::now().to_rfc3339())),
        );

        // An explicit None is written as NULL, not skipped
        if let Some(name) = changes.name {
            update = update.col_expr(Column::Name, Expr::value(Value::from(name)));
        }
        if let Some(bio) = changes.bio {
            update = update.col_expr(Column::Bio, Expr::value(Value::from(bio)));
        }
        if let Some(independent) = changes.independent {
            update = update.col_expr(Column::Independent, Expr::value(Value::from(independent)));
        }

        let result = update
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete_where(&self, id: i32) -> Result<u64, DomainError> {
        let result = AuthorEntity::delete_many()
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db;

    async fn repo() -> SeaOrmAuthorRepository {
        let db = db::init_db("sqlite::memory:").await.expect("Failed to init DB");
        SeaOrmAuthorRepository::new(db)
    }

    fn new_author(email: &str) -> NewAuthor {
        NewAuthor {
            name: Some("Ana".to_string()),
            bio: Some("bio".to_string()),
            independent: Some(true),
            email: Some(email.to_string()),
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_find_by_id() {
        let repo = repo().await;
        let created = repo.create(new_author("a@x.com")).await.unwrap();
        assert!(created.news.is_empty());

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn reads_eager_load_news() {
        let repo = repo().await;
        let created = repo.create(new_author("a@x.com")).await.unwrap();
        let now = chrono::Utc::now().to_rfc3339();
        news::ActiveModel {
            title: Set("Launch".to_string()),
            content: Set(Some("body".to_string())),
            author_id: Set(created.id),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&repo.db)
        .await
        .unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.news.len(), 1);
        assert_eq!(found.news[0].title, "Launch");
        assert_eq!(found.news[0].author_id, created.id);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all[0].news.len(), 1);
    }

    #[tokio::test]
    async fn missing_name_is_rejected_by_the_store() {
        let repo = repo().await;
        let mut input = new_author("a@x.com");
        input.name = None;

        let err = repo.create(input).await.unwrap_err();
        assert!(matches!(err, DomainError::Database(_)));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_by_the_store() {
        let repo = repo().await;
        repo.create(new_author("a@x.com")).await.unwrap();
        assert!(repo.create(new_author("a@x.com")).await.is_err());
    }

    #[tokio::test]
    async fn independent_defaults_to_false() {
        let repo = repo().await;
        let mut input = new_author("a@x.com");
        input.independent = None;

        let created = repo.create(input).await.unwrap();
        assert!(!created.independent);
    }

    #[tokio::test]
    async fn update_where_only_touches_present_fields() {
        let repo = repo().await;
        let created = repo.create(new_author("a@x.com")).await.unwrap();

        let rows = repo
            .update_where(
                created.id,
                AuthorChanges {
                    name: Some(Some("Beatriz".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(rows, 1);

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Beatriz");
        assert_eq!(found.bio.as_deref(), Some("bio"));
        assert!(found.independent);
        assert_eq!(found.email, "a@x.com");
    }

    #[tokio::test]
    async fn update_where_writes_explicit_nulls() {
        let repo = repo().await;
        let created = repo.create(new_author("a@x.com")).await.unwrap();

        repo.update_where(
            created.id,
            AuthorChanges {
                bio: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.bio, None);

        let err = repo
            .update_where(
                created.id,
                AuthorChanges {
                    name: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Database(_)));
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Ana");
    }

    #[tokio::test]
    async fn missing_rows_are_not_errors() {
        let repo = repo().await;
        assert_eq!(
            repo.update_where(42, AuthorChanges::default()).await.unwrap(),
            0
        );
        assert_eq!(repo.delete_where(42).await.unwrap(), 0);
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_where_removes_the_row() {
        let repo = repo().await;
        let kept = repo.create(new_author("a@x.com")).await.unwrap();
        let gone = repo.create(new_author("b@x.com")).await.unwrap();

        assert_eq!(repo.delete_where(gone.id).await.unwrap(), 1);

        let ids: Vec<i32> = repo.find_all().await.unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![kept.id]);
    }
}
