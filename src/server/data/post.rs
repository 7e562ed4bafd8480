//! Post data repository.
//!
//! Posts are returned fully assembled: author nick, like and comment counts and
//! tags are gathered with one query per concern for the whole batch.

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
        comment::PostComment,
        listing::{check_qty, ListingOrder, QtyPage, TOP_QTY},
        post::{CreatePostParams, Post, PostDetails, UpdatePostParams},
    },
    util::authorizer::{is_author_or_admin, is_author_or_has_right_role_or_is_owner},
};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all posts in insertion order
    pub async fn get_all(&self) -> Result<Vec<Post>, AppError> {
        let posts = entity::prelude::Post::find()
            .order_by_asc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        Ok(assemble(self.db, posts).await?)
    }

    /// Gets a post with its comments, oldest comment first.
    ///
    /// # Returns
    /// - `Ok(Some(PostDetails))` - Post found
    /// - `Ok(None)` - No post with this id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PostDetails>, AppError> {
        let Some(post) = entity::prelude::Post::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let comments = entity::prelude::CommentPost::find()
            .filter(entity::comment_post::Column::IdPost.eq(id))
            .order_by_asc(entity::comment_post::Column::CreatedAt)
            .order_by_asc(entity::comment_post::Column::Id)
            .all(self.db)
            .await?;
        let nicks = nicks_of(self.db, comments.iter().map(|c| c.id_user).collect()).await?;
        let comments = comments
            .into_iter()
            .map(|c| {
                let nick = nicks.get(&c.id_user).cloned().unwrap_or_default();
                PostComment::from_entity(c, nick)
            })
            .collect();

        let mut posts = assemble(self.db, vec![post]).await?;

        Ok(posts.pop().map(|post| PostDetails { post, comments }))
    }

    /// Gets the posts of a user, newest first; `None` when the user does not exist.
    pub async fn get_by_user(&self, id_user: i32) -> Result<Option<Vec<Post>>, AppError> {
        if entity::prelude::User::find_by_id(id_user).one(self.db).await?.is_none() {
            return Ok(None);
        }

        let posts = entity::prelude::Post::find()
            .filter(entity::post::Column::IdUser.eq(id_user))
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(assemble(self.db, posts).await?))
    }

    /// Gets the first `qty` posts in insertion order.
    ///
    /// # Returns
    /// - `Ok(Some(QtyPage))` - Page and whether more posts follow
    /// - `Ok(None)` - There are no posts
    /// - `Err(DomainError::WrongNumber)` - `qty` below the minimum
    pub async fn get_qty(&self, qty: i64) -> Result<Option<QtyPage<Post>>, AppError> {
        let qty = check_qty(qty)?;

        let posts = entity::prelude::Post::find()
            .order_by_asc(entity::post::Column::Id)
            .limit(qty as u64 + 1)
            .all(self.db)
            .await?;
        if posts.is_empty() {
            return Ok(None);
        }

        Ok(Some(QtyPage::take(assemble(self.db, posts).await?, qty)))
    }

    /// Gets the first `qty` posts created before `cutoff` in the given order.
    ///
    /// The quantity is validated before the database is touched. `cutoff` defaults to
    /// the current time.
    pub async fn get_qty_sorted(
        &self,
        order: ListingOrder,
        qty: i64,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Option<QtyPage<Post>>, AppError> {
        let qty = check_qty(qty)?;

        if entity::prelude::Post::find().count(self.db).await? == 0 {
            return Ok(None);
        }

        let cutoff = cutoff.unwrap_or_else(Utc::now);
        let select = entity::prelude::Post::find()
            .filter(entity::post::Column::CreatedAt.lt(cutoff));
        let posts = ranking()
            .apply(select, order)
            .limit(qty as u64 + 1)
            .all(self.db)
            .await?;

        Ok(Some(QtyPage::take(assemble(self.db, posts).await?, qty)))
    }

    /// Gets every post in the given order
    pub async fn get_sorted(&self, order: ListingOrder) -> Result<Vec<Post>, AppError> {
        let posts = ranking()
            .apply(entity::prelude::Post::find(), order)
            .all(self.db)
            .await?;

        Ok(assemble(self.db, posts).await?)
    }

    /// Gets the three most liked posts; `None` when there are no posts.
    pub async fn get_top(&self) -> Result<Option<Vec<Post>>, AppError> {
        let posts = ranking()
            .apply(entity::prelude::Post::find(), ListingOrder::MostLikes)
            .limit(TOP_QTY as u64)
            .all(self.db)
            .await?;
        if posts.is_empty() {
            return Ok(None);
        }

        Ok(Some(assemble(self.db, posts).await?))
    }

    /// Creates a post, creating missing tags on demand.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - Created post
    /// - `Ok(None)` - Author not found
    pub async fn create(&self, params: CreatePostParams) -> Result<Option<Post>, AppError> {
        if entity::prelude::User::find_by_id(params.id_user)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let txn = self.db.begin().await?;
        let post = entity::post::ActiveModel {
            id_user: ActiveValue::Set(params.id_user),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            highlight: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        link_tags(&txn, post.id, params.tags).await?;
        txn.commit().await?;

        Ok(assemble(self.db, vec![post]).await?.pop())
    }

    /// Replaces the content and tags of a post.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - Updated post
    /// - `Ok(None)` - Post not found
    /// - `Err(AuthError::AccessDenied)` - Actor is neither the author nor an admin
    pub async fn update(
        &self,
        params: UpdatePostParams,
        actor: &Actor,
    ) -> Result<Option<Post>, AppError> {
        let Some(post) = entity::prelude::Post::find_by_id(params.id).one(self.db).await? else {
            return Ok(None);
        };

        if !is_author_or_admin(actor, post.id_user) {
            return Err(AuthError::AccessDenied(actor.id, format!("modify post {}", post.id)).into());
        }

        let txn = self.db.begin().await?;
        let mut active: entity::post::ActiveModel = post.into();
        active.content = ActiveValue::Set(params.content);
        let post = active.update(&txn).await?;

        entity::prelude::PostTag::delete_many()
            .filter(entity::post_tag::Column::IdPost.eq(post.id))
            .exec(&txn)
            .await?;
        link_tags(&txn, post.id, params.tags).await?;
        txn.commit().await?;

        Ok(assemble(self.db, vec![post]).await?.pop())
    }

    /// Deletes a post with its likes, tag links, comments and reports.
    ///
    /// # Returns
    /// - `Ok(Some(()))` - Post deleted
    /// - `Ok(None)` - Post not found
    /// - `Err(AuthError::AccessDenied)` - Actor is not the author, an admin or a moderator
    pub async fn delete(&self, id: i32, actor: &Actor) -> Result<Option<()>, AppError> {
        let Some(post) = entity::prelude::Post::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if !is_author_or_has_right_role_or_is_owner(actor, post.id_user, post.id_user) {
            return Err(AuthError::AccessDenied(actor.id, format!("delete post {}", id)).into());
        }

        let txn = self.db.begin().await?;
        cascade::delete_posts(&txn, vec![id]).await?;
        txn.commit().await?;

        Ok(Some(()))
    }

    /// Removes one tag from a post.
    ///
    /// # Returns
    /// - `Ok(Some(()))` - Tag removed
    /// - `Ok(None)` - Post not found or the post does not carry the tag
    /// - `Err(AuthError::AccessDenied)` - Actor is neither the author nor an admin
    pub async fn remove_tag(
        &self,
        id: i32,
        id_tag: i32,
        actor: &Actor,
    ) -> Result<Option<()>, AppError> {
        let Some(post) = entity::prelude::Post::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        let Some(link) = entity::prelude::PostTag::find_by_id((id, id_tag))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if !is_author_or_admin(actor, post.id_user) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("remove tag {} from post {}", id_tag, id),
            )
            .into());
        }

        entity::prelude::PostTag::delete_by_id((link.id_post, link.id_tag))
            .exec(self.db)
            .await?;

        Ok(Some(()))
    }
}

async fn link_tags<C: ConnectionTrait>(conn: &C, id_post: i32, names: Vec<String>) -> Result<(), DbErr> {
    for name in tag::normalize_names(names) {
        let tag = tag::find_or_create(conn, &name).await?;
        entity::post_tag::ActiveModel {
            id_post: ActiveValue::Set(id_post),
            id_tag: ActiveValue::Set(tag.id),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

/// Builds domain posts from rows, keeping the row order.
async fn assemble<C: ConnectionTrait>(
    conn: &C,
    posts: Vec<entity::post::Model>,
) -> Result<Vec<Post>, DbErr> {
    let mut assembled = Vec::with_capacity(posts.len());
    let mut rest = posts.into_iter().peekable();
    while rest.peek().is_some() {
        let batch: Vec<_> = rest.by_ref().take(ASSEMBLE_BATCH).collect();
        assembled.extend(assemble_batch(conn, batch).await?);
    }

    Ok(assembled)
}

fn ranking() -> Ranking<entity::post::Entity> {
    Ranking::new::<entity::like_post::Entity, entity::comment_post::Entity>(
        entity::post::Column::Id,
        entity::post::Column::CreatedAt,
        entity::like_post::Column::IdPost,
        entity::comment_post::Column::IdPost,
    )
}

async fn assemble_batch<C: ConnectionTrait>(
    conn: &C,
    posts: Vec<entity::post::Model>,
) -> Result<Vec<Post>, DbErr> {
    let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
    let nicks = nicks_of(conn, posts.iter().map(|p| p.id_user).collect()).await?;

    let mut likes: HashMap<i32, u64> = HashMap::new();
    for like in entity::prelude::LikePost::find()
        .filter(entity::like_post::Column::IdPost.is_in(ids.clone()))
        .all(conn)
        .await?
    {
        *likes.entry(like.id_post).or_default() += 1;
    }

    let mut comments: HashMap<i32, u64> = HashMap::new();
    for comment in entity::prelude::CommentPost::find()
        .filter(entity::comment_post::Column::IdPost.is_in(ids.clone()))
        .all(conn)
        .await?
    {
        *comments.entry(comment.id_post).or_default() += 1;
    }

    let mut tags = tag::tags_of_posts(conn, ids).await?;

    Ok(posts
        .into_iter()
        .map(|p| Post {
            nick: nicks.get(&p.id_user).cloned().unwrap_or_default(),
            likes: likes.get(&p.id).copied().unwrap_or(0),
            comments: comments.get(&p.id).copied().unwrap_or(0),
            tags: tags.remove(&p.id).unwrap_or_default(),
            id: p.id,
            id_user: p.id_user,
            content: p.content,
            created_at: p.created_at,
            highlight: p.highlight,
        })
        .collect())
}
