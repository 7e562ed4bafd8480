pub use super::article::Entity as Article;
pub use super::article_tag::Entity as ArticleTag;
pub use super::blocked_user::Entity as BlockedUser;
pub use super::comment_article::Entity as CommentArticle;
pub use super::comment_post::Entity as CommentPost;
pub use super::friend::Entity as Friend;
pub use super::group::Entity as Group;
pub use super::group_user::Entity as GroupUser;
pub use super::group_user_message::Entity as GroupUserMessage;
pub use super::like_article::Entity as LikeArticle;
pub use super::like_post::Entity as LikePost;
pub use super::post::Entity as Post;
pub use super::post_tag::Entity as PostTag;
pub use super::profile_comment::Entity as ProfileComment;
pub use super::rank::Entity as Rank;
pub use super::reason::Entity as Reason;
pub use super::report_comment_article::Entity as ReportCommentArticle;
pub use super::report_comment_post::Entity as ReportCommentPost;
pub use super::report_post::Entity as ReportPost;
pub use super::report_profile_comment::Entity as ReportProfileComment;
pub use super::report_user::Entity as ReportUser;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
