//! Explicit removal of dependent rows.
//!
//! Every function takes the connection of an open transaction so a parent row and
//! everything referencing it disappear together. Foreign keys cascade as well; these
//! deletes keep the outcome independent of whether the connection enforces them.

use sea_orm::{ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Deletes post comments and the reports filed against them.
pub async fn delete_post_comments<C: ConnectionTrait>(
    conn: &C,
    comment_ids: Vec<i32>,
) -> Result<(), DbErr> {
    if comment_ids.is_empty() {
        return Ok(());
    }

    entity::prelude::ReportCommentPost::delete_many()
        .filter(entity::report_comment_post::Column::IdComment.is_in(comment_ids.clone()))
        .exec(conn)
        .await?;
    entity::prelude::CommentPost::delete_many()
        .filter(entity::comment_post::Column::Id.is_in(comment_ids))
        .exec(conn)
        .await?;

    Ok(())
}

/// Deletes article comments and the reports filed against them.
pub async fn delete_article_comments<C: ConnectionTrait>(
    conn: &C,
    comment_ids: Vec<i32>,
) -> Result<(), DbErr> {
    if comment_ids.is_empty() {
        return Ok(());
    }

    entity::prelude::ReportCommentArticle::delete_many()
        .filter(entity::report_comment_article::Column::IdComment.is_in(comment_ids.clone()))
        .exec(conn)
        .await?;
    entity::prelude::CommentArticle::delete_many()
        .filter(entity::comment_article::Column::Id.is_in(comment_ids))
        .exec(conn)
        .await?;

    Ok(())
}

/// Deletes posts together with their likes, tag links, comments and reports.
pub async fn delete_posts<C: ConnectionTrait>(conn: &C, post_ids: Vec<i32>) -> Result<(), DbErr> {
    if post_ids.is_empty() {
        return Ok(());
    }

    let comment_ids = entity::prelude::CommentPost::find()
        .filter(entity::comment_post::Column::IdPost.is_in(post_ids.clone()))
        .all(conn)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    delete_post_comments(conn, comment_ids).await?;

    entity::prelude::LikePost::delete_many()
        .filter(entity::like_post::Column::IdPost.is_in(post_ids.clone()))
        .exec(conn)
        .await?;
    entity::prelude::PostTag::delete_many()
        .filter(entity::post_tag::Column::IdPost.is_in(post_ids.clone()))
        .exec(conn)
        .await?;
    entity::prelude::ReportPost::delete_many()
        .filter(entity::report_post::Column::IdPost.is_in(post_ids.clone()))
        .exec(conn)
        .await?;
    entity::prelude::Post::delete_many()
        .filter(entity::post::Column::Id.is_in(post_ids))
        .exec(conn)
        .await?;

    Ok(())
}

/// Deletes articles together with their likes, tag links, comments and reports.
pub async fn delete_articles<C: ConnectionTrait>(
    conn: &C,
    article_ids: Vec<i32>,
) -> Result<(), DbErr> {
    if article_ids.is_empty() {
        return Ok(());
    }

    let comment_ids = entity::prelude::CommentArticle::find()
        .filter(entity::comment_article::Column::IdArticle.is_in(article_ids.clone()))
        .all(conn)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    delete_article_comments(conn, comment_ids).await?;

    entity::prelude::LikeArticle::delete_many()
        .filter(entity::like_article::Column::IdArticle.is_in(article_ids.clone()))
        .exec(conn)
        .await?;
    entity::prelude::ArticleTag::delete_many()
        .filter(entity::article_tag::Column::IdArticle.is_in(article_ids.clone()))
        .exec(conn)
        .await?;
    entity::prelude::Article::delete_many()
        .filter(entity::article::Column::Id.is_in(article_ids))
        .exec(conn)
        .await?;

    Ok(())
}

/// Deletes profile comments and the reports filed against them.
pub async fn delete_profile_comments<C: ConnectionTrait>(
    conn: &C,
    comment_ids: Vec<i32>,
) -> Result<(), DbErr> {
    if comment_ids.is_empty() {
        return Ok(());
    }

    entity::prelude::ReportProfileComment::delete_many()
        .filter(
            entity::report_profile_comment::Column::IdProfileComment.is_in(comment_ids.clone()),
        )
        .exec(conn)
        .await?;
    entity::prelude::ProfileComment::delete_many()
        .filter(entity::profile_comment::Column::Id.is_in(comment_ids))
        .exec(conn)
        .await?;

    Ok(())
}

/// Deletes groups with their memberships and messages.
pub async fn delete_groups<C: ConnectionTrait>(conn: &C, group_ids: Vec<i32>) -> Result<(), DbErr> {
    if group_ids.is_empty() {
        return Ok(());
    }

    entity::prelude::GroupUserMessage::delete_many()
        .filter(entity::group_user_message::Column::IdGroup.is_in(group_ids.clone()))
        .exec(conn)
        .await?;
    entity::prelude::GroupUser::delete_many()
        .filter(entity::group_user::Column::IdGroup.is_in(group_ids.clone()))
        .exec(conn)
        .await?;
    entity::prelude::Group::delete_many()
        .filter(entity::group::Column::Id.is_in(group_ids))
        .exec(conn)
        .await?;

    Ok(())
}

/// Deletes everything a user authored or that references the user, then the user.
pub async fn delete_user<C: ConnectionTrait>(conn: &C, id_user: i32) -> Result<(), DbErr> {
    let post_ids = entity::prelude::Post::find()
        .filter(entity::post::Column::IdUser.eq(id_user))
        .all(conn)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    delete_posts(conn, post_ids).await?;

    let article_ids = entity::prelude::Article::find()
        .filter(entity::article::Column::IdUser.eq(id_user))
        .all(conn)
        .await?
        .into_iter()
        .map(|a| a.id)
        .collect();
    delete_articles(conn, article_ids).await?;

    let post_comment_ids = entity::prelude::CommentPost::find()
        .filter(entity::comment_post::Column::IdUser.eq(id_user))
        .all(conn)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    delete_post_comments(conn, post_comment_ids).await?;

    let article_comment_ids = entity::prelude::CommentArticle::find()
        .filter(entity::comment_article::Column::IdUser.eq(id_user))
        .all(conn)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    delete_article_comments(conn, article_comment_ids).await?;

    let profile_comment_ids = entity::prelude::ProfileComment::find()
        .filter(
            Condition::any()
                .add(entity::profile_comment::Column::IdUser.eq(id_user))
                .add(entity::profile_comment::Column::IdUserComment.eq(id_user)),
        )
        .all(conn)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    delete_profile_comments(conn, profile_comment_ids).await?;

    let group_ids = entity::prelude::Group::find()
        .filter(entity::group::Column::IdUserCreator.eq(id_user))
        .all(conn)
        .await?
        .into_iter()
        .map(|g| g.id)
        .collect();
    delete_groups(conn, group_ids).await?;

    entity::prelude::GroupUserMessage::delete_many()
        .filter(entity::group_user_message::Column::IdUser.eq(id_user))
        .exec(conn)
        .await?;
    entity::prelude::GroupUser::delete_many()
        .filter(entity::group_user::Column::IdUser.eq(id_user))
        .exec(conn)
        .await?;

    entity::prelude::LikePost::delete_many()
        .filter(entity::like_post::Column::IdUser.eq(id_user))
        .exec(conn)
        .await?;
    entity::prelude::LikeArticle::delete_many()
        .filter(entity::like_article::Column::IdUser.eq(id_user))
        .exec(conn)
        .await?;

    entity::prelude::ReportPost::delete_many()
        .filter(entity::report_post::Column::IdUser.eq(id_user))
        .exec(conn)
        .await?;
    entity::prelude::ReportCommentPost::delete_many()
        .filter(entity::report_comment_post::Column::IdUser.eq(id_user))
        .exec(conn)
        .await?;
    entity::prelude::ReportCommentArticle::delete_many()
        .filter(entity::report_comment_article::Column::IdUser.eq(id_user))
        .exec(conn)
        .await?;
    entity::prelude::ReportProfileComment::delete_many()
        .filter(entity::report_profile_comment::Column::IdUser.eq(id_user))
        .exec(conn)
        .await?;
    entity::prelude::ReportUser::delete_many()
        .filter(
            Condition::any()
                .add(entity::report_user::Column::IdUserReported.eq(id_user))
                .add(entity::report_user::Column::IdUserReporting.eq(id_user)),
        )
        .exec(conn)
        .await?;

    entity::prelude::Friend::delete_many()
        .filter(
            Condition::any()
                .add(entity::friend::Column::IdUser.eq(id_user))
                .add(entity::friend::Column::IdUserFriend.eq(id_user)),
        )
        .exec(conn)
        .await?;
    entity::prelude::BlockedUser::delete_many()
        .filter(
            Condition::any()
                .add(entity::blocked_user::Column::IdUser.eq(id_user))
                .add(entity::blocked_user::Column::IdUserBlocked.eq(id_user)),
        )
        .exec(conn)
        .await?;

    entity::prelude::User::delete_by_id(id_user).exec(conn).await?;

    Ok(())
}
