//! Ranked listing queries shared by the post and article repositories.
//!
//! Ordering and limits are applied in SQL so a page only loads the rows it returns.
//! Like and comment counts used for ranking are correlated subqueries on the child
//! tables.

use sea_orm::{
    sea_query::Expr, EntityName, EntityTrait, IdenStatic, Order, QueryOrder, Select,
};

use crate::server::model::listing::ListingOrder;

/// Upper bound of ids bound into one `IN` list while assembling rows.
///
/// Keeps each query well under SQLite's bound-parameter limit.
pub const ASSEMBLE_BATCH: usize = 500;

/// Columns a listing of `E` is ranked by.
pub struct Ranking<E: EntityTrait> {
    id: E::Column,
    created_at: E::Column,
    likes: String,
    comments: String,
}

impl<E: EntityTrait> Ranking<E> {
    /// Ranks `E` by its own `id` and `created_at` and by the rows of `L` and `C`
    /// pointing at it through `like_fk` and `comment_fk`.
    pub fn new<L: EntityTrait, C: EntityTrait>(
        id: E::Column,
        created_at: E::Column,
        like_fk: L::Column,
        comment_fk: C::Column,
    ) -> Self {
        Self {
            id,
            created_at,
            likes: count_of::<E, L>(id, like_fk),
            comments: count_of::<E, C>(id, comment_fk),
        }
    }

    /// Orders `select` by `order`. Equal keys fall back to ascending id.
    pub fn apply(&self, select: Select<E>, order: ListingOrder) -> Select<E> {
        let select = match order {
            ListingOrder::MostLikes => select.order_by(Expr::cust(self.likes.clone()), Order::Desc),
            ListingOrder::LeastLikes => select.order_by(Expr::cust(self.likes.clone()), Order::Asc),
            ListingOrder::MostComments => {
                select.order_by(Expr::cust(self.comments.clone()), Order::Desc)
            }
            ListingOrder::Newest => select.order_by_desc(self.created_at),
            ListingOrder::Oldest => select.order_by_asc(self.created_at),
        };

        select.order_by_asc(self.id)
    }
}

/// `(SELECT COUNT(*) ...)` of the `C` rows whose `fk` equals the parent's `id`.
fn count_of<P: EntityTrait, C: EntityTrait>(id: P::Column, fk: C::Column) -> String {
    let parent = P::default();
    let child = C::default();

    format!(
        r#"(SELECT COUNT(*) FROM "{child}" WHERE "{child}"."{fk}" = "{parent}"."{id}")"#,
        child = child.table_name(),
        fk = fk.as_str(),
        parent = parent.table_name(),
        id = id.as_str(),
    )
}
