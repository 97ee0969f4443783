//! Имена claims, которыми backend помечает права пользователя.
//!
//! Для каждого ресурса три claim: `<resource>.read`, `<resource>.write`, `<resource>.delete`.

pub const POSTS_READ: &str = "posts.read";
pub const POSTS_WRITE: &str = "posts.write";
pub const POSTS_DELETE: &str = "posts.delete";

pub const COMMENTS_READ: &str = "comments.read";
pub const COMMENTS_WRITE: &str = "comments.write";
pub const COMMENTS_DELETE: &str = "comments.delete";

pub const CATEGORIES_READ: &str = "categories.read";
pub const CATEGORIES_WRITE: &str = "categories.write";
pub const CATEGORIES_DELETE: &str = "categories.delete";

pub const TAGS_READ: &str = "tags.read";
pub const TAGS_WRITE: &str = "tags.write";
pub const TAGS_DELETE: &str = "tags.delete";

pub const FILES_READ: &str = "files.read";
pub const FILES_WRITE: &str = "files.write";
pub const FILES_DELETE: &str = "files.delete";

pub const SUBSCRIBERS_READ: &str = "subscribers.read";
pub const SUBSCRIBERS_WRITE: &str = "subscribers.write";
pub const SUBSCRIBERS_DELETE: &str = "subscribers.delete";

pub const CAMPAIGNS_READ: &str = "campaigns.read";
pub const CAMPAIGNS_WRITE: &str = "campaigns.write";
pub const CAMPAIGNS_DELETE: &str = "campaigns.delete";

pub const EMAILS_READ: &str = "emails.read";
pub const EMAILS_WRITE: &str = "emails.write";
pub const EMAILS_DELETE: &str = "emails.delete";

pub const USERS_READ: &str = "users.read";
pub const USERS_WRITE: &str = "users.write";
pub const USERS_DELETE: &str = "users.delete";

/// Набор claims одного ресурса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceClaims {
    pub read: &'static str,
    pub write: &'static str,
    pub delete: &'static str,
}

pub const POSTS: ResourceClaims = ResourceClaims {
    read: POSTS_READ,
    write: POSTS_WRITE,
    delete: POSTS_DELETE,
};

pub const COMMENTS: ResourceClaims = ResourceClaims {
    read: COMMENTS_READ,
    write: COMMENTS_WRITE,
    delete: COMMENTS_DELETE,
};

pub const CATEGORIES: ResourceClaims = ResourceClaims {
    read: CATEGORIES_READ,
    write: CATEGORIES_WRITE,
    delete: CATEGORIES_DELETE,
};

pub const TAGS: ResourceClaims = ResourceClaims {
    read: TAGS_READ,
    write: TAGS_WRITE,
    delete: TAGS_DELETE,
};

pub const FILES: ResourceClaims = ResourceClaims {
    read: FILES_READ,
    write: FILES_WRITE,
    delete: FILES_DELETE,
};

pub const SUBSCRIBERS: ResourceClaims = ResourceClaims {
    read: SUBSCRIBERS_READ,
    write: SUBSCRIBERS_WRITE,
    delete: SUBSCRIBERS_DELETE,
};

pub const CAMPAIGNS: ResourceClaims = ResourceClaims {
    read: CAMPAIGNS_READ,
    write: CAMPAIGNS_WRITE,
    delete: CAMPAIGNS_DELETE,
};

pub const EMAILS: ResourceClaims = ResourceClaims {
    read: EMAILS_READ,
    write: EMAILS_WRITE,
    delete: EMAILS_DELETE,
};

pub const USERS: ResourceClaims = ResourceClaims {
    read: USERS_READ,
    write: USERS_WRITE,
    delete: USERS_DELETE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_claims_share_prefix() {
        for rc in [
            POSTS, COMMENTS, CATEGORIES, TAGS, FILES, SUBSCRIBERS, CAMPAIGNS, EMAILS, USERS,
        ] {
            let prefix = rc.read.trim_end_matches(".read");
            assert_eq!(rc.write, format!("{}.write", prefix));
            assert_eq!(rc.delete, format!("{}.delete", prefix));
        }
    }
}
