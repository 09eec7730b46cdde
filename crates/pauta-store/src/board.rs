//! Board projector: posts bucketed into fixed, ordered status columns.

use pauta_shared::PostStatus;
use serde::Serialize;

use crate::models::Post;

/// One kanban column.
#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub status: PostStatus,
    /// Posts with this status, in store insertion order.  No secondary
    /// sort is applied.
    pub posts: Vec<Post>,
}

impl BoardColumn {
    pub fn count(&self) -> usize {
        self.posts.len()
    }
}

/// Bucket the post list into the six workflow columns, in
/// [`PostStatus::ALL`] order.  No WIP limits are enforced.
pub fn board_columns(posts: &[Post]) -> Vec<BoardColumn> {
    PostStatus::ALL
        .into_iter()
        .map(|status| BoardColumn {
            status,
            posts: posts.iter().filter(|p| p.status == status).cloned().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Post;
    use crate::seed;
    use crate::store::ContentStore;
    use pauta_shared::PostFormat;

    fn post(id: &str, status: PostStatus) -> Post {
        Post {
            id: id.to_string(),
            title: id.to_string(),
            date: "2025-06-10".parse().unwrap(),
            format: PostFormat::Static,
            status,
            client: "TechStart Solutions".to_string(),
            caption: String::new(),
            image_url: None,
            comments: Vec::new(),
        }
    }

    fn column<'a>(columns: &'a [BoardColumn], status: PostStatus) -> &'a BoardColumn {
        columns.iter().find(|c| c.status == status).unwrap()
    }

    #[test]
    fn columns_come_in_fixed_order() {
        let columns = board_columns(&[]);
        let order: Vec<PostStatus> = columns.iter().map(|c| c.status).collect();
        assert_eq!(order, PostStatus::ALL);
        assert!(columns.iter().all(|c| c.count() == 0));
    }

    #[test]
    fn every_post_lands_in_exactly_one_column() {
        let posts = vec![
            post("1", PostStatus::Draft),
            post("2", PostStatus::Approval),
            post("3", PostStatus::Draft),
        ];
        let columns = board_columns(&posts);
        let total: usize = columns.iter().map(|c| c.count()).sum();
        assert_eq!(total, posts.len());
        let draft_ids: Vec<&str> = column(&columns, PostStatus::Draft)
            .posts
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        // Insertion order within the column.
        assert_eq!(draft_ids, ["1", "3"]);
    }

    #[test]
    fn approving_a_post_moves_it_between_columns() {
        let mut store = ContentStore::new(seed::initial_strategy());
        store.upsert_post(post("1", PostStatus::Approval));

        let before = store.get_post("1").unwrap().clone();
        store.set_status("1", PostStatus::Approved).unwrap();
        let after = store.get_post("1").unwrap().clone();
        // Identical except for the status field.
        assert_eq!(
            Post {
                status: PostStatus::Approval,
                ..after.clone()
            },
            before
        );

        let columns = board_columns(store.list_posts());
        assert_eq!(column(&columns, PostStatus::Approval).count(), 0);
        assert_eq!(column(&columns, PostStatus::Approved).count(), 1);
    }
}
