use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{error::AppError, model::post::Tag};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all tags ordered by name
    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        let tags = entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(tags.into_iter().map(Tag::from_entity).collect())
    }
}

/// Returns the tag with the given name, creating it when missing.
pub async fn find_or_create<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<entity::tag::Model, DbErr> {
    if let Some(tag) = entity::prelude::Tag::find()
        .filter(entity::tag::Column::Name.eq(name))
        .one(conn)
        .await?
    {
        return Ok(tag);
    }

    entity::tag::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(conn)
    .await
}

/// Trims tag names and drops blanks and duplicates, keeping first occurrence order.
pub fn normalize_names(names: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for name in names {
        let name = name.trim().to_string();
        if !name.is_empty() && !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

/// Tags of each post, keyed by post id, in tag name order.
pub async fn tags_of_posts<C: ConnectionTrait>(
    conn: &C,
    post_ids: Vec<i32>,
) -> Result<HashMap<i32, Vec<Tag>>, DbErr> {
    let links = entity::prelude::PostTag::find()
        .filter(entity::post_tag::Column::IdPost.is_in(post_ids))
        .all(conn)
        .await?;

    let pairs = links.into_iter().map(|l| (l.id_post, l.id_tag)).collect();
    group_tags(conn, pairs).await
}

/// Tags of each article, keyed by article id, in tag name order.
pub async fn tags_of_articles<C: ConnectionTrait>(
    conn: &C,
    article_ids: Vec<i32>,
) -> Result<HashMap<i32, Vec<Tag>>, DbErr> {
    let links = entity::prelude::ArticleTag::find()
        .filter(entity::article_tag::Column::IdArticle.is_in(article_ids))
        .all(conn)
        .await?;

    let pairs = links.into_iter().map(|l| (l.id_article, l.id_tag)).collect();
    group_tags(conn, pairs).await
}

async fn group_tags<C: ConnectionTrait>(
    conn: &C,
    pairs: Vec<(i32, i32)>,
) -> Result<HashMap<i32, Vec<Tag>>, DbErr> {
    let tag_ids: Vec<i32> = pairs.iter().map(|(_, id_tag)| *id_tag).collect();
    let tags: HashMap<i32, entity::tag::Model> = if tag_ids.is_empty() {
        HashMap::new()
    } else {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(tag_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect()
    };

    let mut grouped: HashMap<i32, Vec<Tag>> = HashMap::new();
    for (owner, id_tag) in pairs {
        if let Some(tag) = tags.get(&id_tag) {
            grouped
                .entry(owner)
                .or_default()
                .push(Tag::from_entity(tag.clone()));
        }
    }
    for tags in grouped.values_mut() {
        tags.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(grouped)
}
