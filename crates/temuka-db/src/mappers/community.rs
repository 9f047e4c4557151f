//! Community model <-> entity mappers

use temuka_core::entities::{Community, CommunityMember};
use temuka_core::value_objects::EntityId;

use crate::models::{CommunityMemberModel, CommunityModel};

impl From<CommunityModel> for Community {
    fn from(model: CommunityModel) -> Self {
        Community {
            id: EntityId::new(model.id),
            name: model.name,
            description: model.description,
            logo_picture: model.logo_picture,
            members_count: model.members_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CommunityMemberModel> for CommunityMember {
    fn from(model: CommunityMemberModel) -> Self {
        CommunityMember {
            community_id: EntityId::new(model.community_id),
            user_id: EntityId::new(model.user_id),
            joined_at: model.joined_at,
        }
    }
}
