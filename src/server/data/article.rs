//! Article data repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::{
        cascade,
        listing::{Ranking, ASSEMBLE_BATCH},
        tag,
        user::nicks_of,
    },
    error::{auth::AuthError, AppError},
    model::{
        actor::Actor,
        comment::ArticleComment,
        listing::{check_qty, ListingOrder, QtyPage, TOP_QTY},
        article::{Article, ArticleDetails, CreateArticleParams, UpdateArticleParams},
    },
    util::authorizer::{is_author_or_admin, is_author_or_has_right_role_or_is_owner},
};

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all articles in insertion order
    pub async fn get_all(&self) -> Result<Vec<Article>, AppError> {
        let articles = entity::prelude::Article::find()
            .order_by_asc(entity::article::Column::Id)
            .all(self.db)
            .await?;

        Ok(assemble(self.db, articles).await?)
    }

    /// Gets an article with its comments, oldest comment first.
    ///
    /// # Returns
    /// - `Ok(Some(ArticleDetails))` - Article found
    /// - `Ok(None)` - No article with this id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ArticleDetails>, AppError> {
        let Some(article) = entity::prelude::Article::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let comments = entity::prelude::CommentArticle::find()
            .filter(entity::comment_article::Column::IdArticle.eq(id))
            .order_by_asc(entity::comment_article::Column::CreatedAt)
            .order_by_asc(entity::comment_article::Column::Id)
            .all(self.db)
            .await?;
        let nicks = nicks_of(self.db, comments.iter().map(|c| c.id_user).collect()).await?;
        let comments = comments
            .into_iter()
            .map(|c| {
                let nick = nicks.get(&c.id_user).cloned().unwrap_or_default();
                ArticleComment::from_entity(c, nick)
            })
            .collect();

        let mut articles = assemble(self.db, vec![article]).await?;

        Ok(articles.pop().map(|article| ArticleDetails { article, comments }))
    }

    /// Gets the articles of a user, newest first; `None` when the user does not exist.
    pub async fn get_by_user(&self, id_user: i32) -> Result<Option<Vec<Article>>, AppError> {
        if entity::prelude::User::find_by_id(id_user).one(self.db).await?.is_none() {
            return Ok(None);
        }

        let articles = entity::prelude::Article::find()
            .filter(entity::article::Column::IdUser.eq(id_user))
            .order_by_desc(entity::article::Column::CreatedAt)
            .order_by_desc(entity::article::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(assemble(self.db, articles).await?))
    }

    /// Gets the first `qty` articles in insertion order.
    ///
    /// # Returns
    /// - `Ok(Some(QtyPage))` - Page and whether more articles follow
    /// - `Ok(None)` - There are no articles
    /// - `Err(DomainError::WrongNumber)` - `qty` below the minimum
    pub async fn get_qty(&self, qty: i64) -> Result<Option<QtyPage<Article>>, AppError> {
        let qty = check_qty(qty)?;

        let articles = entity::prelude::Article::find()
            .order_by_asc(entity::article::Column::Id)
            .limit(qty as u64 + 1)
            .all(self.db)
            .await?;
        if articles.is_empty() {
            return Ok(None);
        }

        Ok(Some(QtyPage::take(assemble(self.db, articles).await?, qty)))
    }

    /// Gets the first `qty` articles created before `cutoff` in the given order.
    ///
    /// The quantity is validated before the database is touched. `cutoff` defaults to
    /// the current time.
    pub async fn get_qty_sorted(
        &self,
        order: ListingOrder,
        qty: i64,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Option<QtyPage<Article>>, AppError> {
        let qty = check_qty(qty)?;

        if entity::prelude::Article::find().count(self.db).await? == 0 {
            return Ok(None);
        }

        let cutoff = cutoff.unwrap_or_else(Utc::now);
        let select = entity::prelude::Article::find()
            .filter(entity::article::Column::CreatedAt.lt(cutoff));
        let articles = ranking()
            .apply(select, order)
            .limit(qty as u64 + 1)
            .all(self.db)
            .await?;

        Ok(Some(QtyPage::take(assemble(self.db, articles).await?, qty)))
    }

    /// Gets every article in the given order
    pub async fn get_sorted(&self, order: ListingOrder) -> Result<Vec<Article>, AppError> {
        let articles = ranking()
            .apply(entity::prelude::Article::find(), order)
            .all(self.db)
            .await?;

        Ok(assemble(self.db, articles).await?)
    }

    /// Gets the three most liked articles; `None` when there are no articles.
    pub async fn get_top(&self) -> Result<Option<Vec<Article>>, AppError> {
        let articles = ranking()
            .apply(entity::prelude::Article::find(), ListingOrder::MostLikes)
            .limit(TOP_QTY as u64)
            .all(self.db)
            .await?;
        if articles.is_empty() {
            return Ok(None);
        }

        Ok(Some(assemble(self.db, articles).await?))
    }

    /// Creates an article, creating missing tags on demand.
    pub async fn create(&self, params: CreateArticleParams) -> Result<Option<Article>, AppError> {
        if entity::prelude::User::find_by_id(params.id_user)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let txn = self.db.begin().await?;
        let article = entity::article::ActiveModel {
            id_user: ActiveValue::Set(params.id_user),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            highlight: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        link_tags(&txn, article.id, params.tags).await?;
        txn.commit().await?;

        Ok(assemble(self.db, vec![article]).await?.pop())
    }

    /// Replaces the title, content and tags of an article.
    pub async fn update(
        &self,
        params: UpdateArticleParams,
        actor: &Actor,
    ) -> Result<Option<Article>, AppError> {
        let Some(article) = entity::prelude::Article::find_by_id(params.id).one(self.db).await? else {
            return Ok(None);
        };

        if !is_author_or_admin(actor, article.id_user) {
            return Err(AuthError::AccessDenied(actor.id, format!("modify article {}", article.id)).into());
        }

        let txn = self.db.begin().await?;
        let mut active: entity::article::ActiveModel = article.into();
        active.title = ActiveValue::Set(params.title);
        active.content = ActiveValue::Set(params.content);
        let article = active.update(&txn).await?;

        entity::prelude::ArticleTag::delete_many()
            .filter(entity::article_tag::Column::IdArticle.eq(article.id))
            .exec(&txn)
            .await?;
        link_tags(&txn, article.id, params.tags).await?;
        txn.commit().await?;

        Ok(assemble(self.db, vec![article]).await?.pop())
    }

    /// Deletes an article with its likes, tag links, comments and reports.
    pub async fn delete(&self, id: i32, actor: &Actor) -> Result<Option<()>, AppError> {
        let Some(article) = entity::prelude::Article::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if !is_author_or_has_right_role_or_is_owner(actor, article.id_user, article.id_user) {
            return Err(AuthError::AccessDenied(actor.id, format!("delete article {}", id)).into());
        }

        let txn = self.db.begin().await?;
        cascade::delete_articles(&txn, vec![id]).await?;
        txn.commit().await?;

        Ok(Some(()))
    }

    /// Removes one tag from an article.
    pub async fn remove_tag(
        &self,
        id: i32,
        id_tag: i32,
        actor: &Actor,
    ) -> Result<Option<()>, AppError> {
        let Some(article) = entity::prelude::Article::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        let Some(link) = entity::prelude::ArticleTag::find_by_id((id, id_tag))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if !is_author_or_admin(actor, article.id_user) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("remove tag {} from article {}", id_tag, id),
            )
            .into());
        }

        entity::prelude::ArticleTag::delete_by_id((link.id_article, link.id_tag))
            .exec(self.db)
            .await?;

        Ok(Some(()))
    }
}

async fn link_tags<C: ConnectionTrait>(conn: &C, id_article: i32, names: Vec<String>) -> Result<(), DbErr> {
    for name in tag::normalize_names(names) {
        let tag = tag::find_or_create(conn, &name).await?;
        entity::article_tag::ActiveModel {
            id_article: ActiveValue::Set(id_article),
            id_tag: ActiveValue::Set(tag.id),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

/// Builds domain articles from rows, keeping the row order.
async fn assemble<C: ConnectionTrait>(
    conn: &C,
    articles: Vec<entity::article::Model>,
) -> Result<Vec<Article>, DbErr> {
    let mut assembled = Vec::with_capacity(articles.len());
    let mut rest = articles.into_iter().peekable();
    while rest.peek().is_some() {
        let batch: Vec<_> = rest.by_ref().take(ASSEMBLE_BATCH).collect();
        assembled.extend(assemble_batch(conn, batch).await?);
    }

    Ok(assembled)
}

fn ranking() -> Ranking<entity::article::Entity> {
    Ranking::new::<entity::like_article::Entity, entity::comment_article::Entity>(
        entity::article::Column::Id,
        entity::article::Column::CreatedAt,
        entity::like_article::Column::IdArticle,
        entity::comment_article::Column::IdArticle,
    )
}

async fn assemble_batch<C: ConnectionTrait>(
    conn: &C,
    articles: Vec<entity::article::Model>,
) -> Result<Vec<Article>, DbErr> {
    let ids: Vec<i32> = articles.iter().map(|p| p.id).collect();
    let nicks = nicks_of(conn, articles.iter().map(|p| p.id_user).collect()).await?;

    let mut likes: HashMap<i32, u64> = HashMap::new();
    for like in entity::prelude::LikeArticle::find()
        .filter(entity::like_article::Column::IdArticle.is_in(ids.clone()))
        .all(conn)
        .await?
    {
        *likes.entry(like.id_article).or_default() += 1;
    }

    let mut comments: HashMap<i32, u64> = HashMap::new();
    for comment in entity::prelude::CommentArticle::find()
        .filter(entity::comment_article::Column::IdArticle.is_in(ids.clone()))
        .all(conn)
        .await?
    {
        *comments.entry(comment.id_article).or_default() += 1;
    }

    let mut tags = tag::tags_of_articles(conn, ids).await?;

    Ok(articles
        .into_iter()
        .map(|p| Article {
            nick: nicks.get(&p.id_user).cloned().unwrap_or_default(),
            likes: likes.get(&p.id).copied().unwrap_or(0),
            comments: comments.get(&p.id).copied().unwrap_or(0),
            tags: tags.remove(&p.id).unwrap_or_default(),
            id: p.id,
            id_user: p.id_user,
            title: p.title,
            content: p.content,
            created_at: p.created_at,
            highlight: p.highlight,
        })
        .collect())
}
