/// Signed-in user. Authentication is a local stand-in; no identity provider
/// is contacted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl AuthUser {
    /// The fixed user installed by a login click.
    pub fn demo() -> Self {
        Self {
            id: "u_123".to_string(),
            name: "Researcher User".to_string(),
            email: "researcher@example.com".to_string(),
            avatar: "https://picsum.photos/id/64/200/200".to_string(),
        }
    }
}
