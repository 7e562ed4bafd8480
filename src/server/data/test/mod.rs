mod comment_article;
mod comment_post;
mod friend;
mod group;
mod group_message;
mod like_post;
mod link;
mod post;
mod profile_comment;
mod rank;
mod reason;
mod report;
mod tag;
mod user;
