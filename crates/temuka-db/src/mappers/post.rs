//! Post model <-> entity mapper

use temuka_core::entities::Post;
use temuka_core::value_objects::EntityId;

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: EntityId::new(model.id),
            user_id: EntityId::new(model.user_id),
            community_id: model.community_id.map(EntityId::new),
            content: model.content,
            likes_count: model.likes_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
