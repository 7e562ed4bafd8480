use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        article, auth, comment, friend, group, like, link, post as posts, profile_comment, rank,
        reason, report, tag, user,
    },
    state::AppState,
};

/// OpenAPI document of every endpoint, served at `/api/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Gryzilla API"),
    paths(
        auth::login,
        auth::refresh,
        user::get_users,
        user::get_user,
        user::add_user,
        user::put_user,
        user::delete_user,
        user::change_rank,
        user::set_photo,
        user::get_photo,
        user::change_password,
        user::change_password_short,
        user::exist_nick,
        rank::get_ranks,
        rank::add_rank,
        rank::put_rank,
        rank::delete_rank,
        posts::get_posts,
        posts::get_post,
        posts::get_user_posts,
        posts::get_qty_posts,
        posts::get_qty_sorted_posts,
        posts::get_top_posts,
        posts::get_sorted_posts,
        posts::add_post,
        posts::put_post,
        posts::delete_post,
        posts::delete_post_tag,
        article::get_articles,
        article::get_article,
        article::get_user_articles,
        article::get_qty_articles,
        article::get_qty_sorted_articles,
        article::get_top_articles,
        article::get_sorted_articles,
        article::add_article,
        article::put_article,
        article::delete_article,
        article::delete_article_tag,
        comment::get_post_comments,
        comment::add_post_comment,
        comment::put_post_comment,
        comment::delete_post_comment,
        comment::get_article_comments,
        comment::add_article_comment,
        comment::put_article_comment,
        comment::delete_article_comment,
        profile_comment::get_profile_comments,
        profile_comment::add_profile_comment,
        profile_comment::put_profile_comment,
        profile_comment::delete_profile_comment,
        like::like_post,
        like::unlike_post,
        like::post_like_exists,
        like::like_article,
        like::unlike_article,
        like::article_like_exists,
        report::get_reports,
        report::get_report,
        report::add_report,
        report::put_report,
        report::delete_report,
        report::get_user_reports,
        report::get_user_report,
        report::add_user_report,
        report::put_user_report,
        report::delete_user_report,
        reason::get_reasons,
        reason::add_reason,
        reason::delete_reason,
        link::get_links,
        link::set_link,
        link::delete_link,
        friend::get_friends,
        friend::add_friend,
        friend::remove_friend,
        friend::get_blocked,
        friend::block_user,
        friend::unblock_user,
        group::get_groups,
        group::get_group,
        group::get_user_groups,
        group::add_group,
        group::put_group,
        group::delete_group,
        group::join_group,
        group::leave_group,
        group::is_member,
        group::get_group_messages,
        group::add_group_message,
        group::put_group_message,
        group::delete_group_message,
        tag::get_tags,
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/refresh", post(auth::refresh))
        .merge(user_routes())
        .route("/api/ranks", get(rank::get_ranks).post(rank::add_rank))
        .route(
            "/api/ranks/{id}",
            put(rank::put_rank).delete(rank::delete_rank),
        )
        .merge(post_routes())
        .merge(article_routes())
        .merge(comment_routes())
        .merge(like_routes())
        .merge(report_routes())
        .merge(group_routes())
        .route("/api/tags", get(tag::get_tags))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(user::get_users).post(user::add_user))
        .route("/api/users/exist-nick", post(user::exist_nick))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::put_user)
                .delete(user::delete_user),
        )
        .route("/api/users/{id}/rank", put(user::change_rank))
        .route(
            "/api/users/{id}/photo",
            get(user::get_photo).put(user::set_photo),
        )
        .route("/api/users/{id}/password", put(user::change_password))
        .route(
            "/api/users/{id}/password/reset",
            put(user::change_password_short),
        )
        .route("/api/users/{id}/links", get(link::get_links))
        .route(
            "/api/users/{id}/links/{platform}",
            put(link::set_link).delete(link::delete_link),
        )
        .route("/api/users/{id}/friends", get(friend::get_friends))
        .route(
            "/api/users/{id}/friends/{id_friend}",
            post(friend::add_friend).delete(friend::remove_friend),
        )
        .route("/api/users/{id}/blocked", get(friend::get_blocked))
        .route(
            "/api/users/{id}/blocked/{id_blocked}",
            post(friend::block_user).delete(friend::unblock_user),
        )
        .route(
            "/api/users/{id}/profile-comments",
            get(profile_comment::get_profile_comments),
        )
        .route("/api/users/{id}/groups", get(group::get_user_groups))
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/api/posts", get(posts::get_posts).post(posts::add_post))
        .route("/api/posts/qty", get(posts::get_qty_posts))
        .route("/api/posts/qty/{order}", get(posts::get_qty_sorted_posts))
        .route("/api/posts/top", get(posts::get_top_posts))
        .route("/api/posts/sorted/{order}", get(posts::get_sorted_posts))
        .route("/api/posts/user/{id_user}", get(posts::get_user_posts))
        .route(
            "/api/posts/{id}",
            get(posts::get_post)
                .put(posts::put_post)
                .delete(posts::delete_post),
        )
        .route(
            "/api/posts/{id}/tags/{id_tag}",
            delete(posts::delete_post_tag),
        )
}

fn article_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/articles",
            get(article::get_articles).post(article::add_article),
        )
        .route("/api/articles/qty", get(article::get_qty_articles))
        .route(
            "/api/articles/qty/{order}",
            get(article::get_qty_sorted_articles),
        )
        .route("/api/articles/top", get(article::get_top_articles))
        .route(
            "/api/articles/sorted/{order}",
            get(article::get_sorted_articles),
        )
        .route(
            "/api/articles/user/{id_user}",
            get(article::get_user_articles),
        )
        .route(
            "/api/articles/{id}",
            get(article::get_article)
                .put(article::put_article)
                .delete(article::delete_article),
        )
        .route(
            "/api/articles/{id}/tags/{id_tag}",
            delete(article::delete_article_tag),
        )
}

fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/api/posts/{id}/comments", get(comment::get_post_comments))
        .route("/api/post-comments", post(comment::add_post_comment))
        .route(
            "/api/post-comments/{id}",
            put(comment::put_post_comment).delete(comment::delete_post_comment),
        )
        .route(
            "/api/articles/{id}/comments",
            get(comment::get_article_comments),
        )
        .route("/api/article-comments", post(comment::add_article_comment))
        .route(
            "/api/article-comments/{id}",
            put(comment::put_article_comment).delete(comment::delete_article_comment),
        )
        .route(
            "/api/profile-comments",
            post(profile_comment::add_profile_comment),
        )
        .route(
            "/api/profile-comments/{id}",
            put(profile_comment::put_profile_comment)
                .delete(profile_comment::delete_profile_comment),
        )
}

fn like_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/likes/posts/{id_user}/{id_post}",
            get(like::post_like_exists)
                .post(like::like_post)
                .delete(like::unlike_post),
        )
        .route(
            "/api/likes/articles/{id_user}/{id_article}",
            get(like::article_like_exists)
                .post(like::like_article)
                .delete(like::unlike_article),
        )
}

fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/reports/{kind}",
            get(report::get_reports).post(report::add_report),
        )
        .route(
            "/api/reports/{kind}/{id_user}/{id_target}/{id_reason}",
            get(report::get_report)
                .put(report::put_report)
                .delete(report::delete_report),
        )
        .route(
            "/api/user-reports",
            get(report::get_user_reports).post(report::add_user_report),
        )
        .route(
            "/api/user-reports/{id}",
            get(report::get_user_report)
                .put(report::put_user_report)
                .delete(report::delete_user_report),
        )
        .route("/api/reasons", get(reason::get_reasons).post(reason::add_reason))
        .route("/api/reasons/{id}", delete(reason::delete_reason))
}

fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/api/groups", get(group::get_groups).post(group::add_group))
        .route(
            "/api/groups/{id}",
            get(group::get_group)
                .put(group::put_group)
                .delete(group::delete_group),
        )
        .route(
            "/api/groups/{id}/users/{id_user}",
            get(group::is_member)
                .post(group::join_group)
                .delete(group::leave_group),
        )
        .route(
            "/api/groups/{id}/messages",
            get(group::get_group_messages).post(group::add_group_message),
        )
        .route(
            "/api/group-messages/{id}",
            put(group::put_group_message).delete(group::delete_group_message),
        )
}
