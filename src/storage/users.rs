use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    pub id: u64,
    pub nom: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub nom: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub nom: Option<String>,
    pub email: Option<String>,
}

/// In-memory user directory
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let mut users = Self::new();
        super::seed::load_users(&mut users);
        users
    }

    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn create(&mut self, fields: NewUser) -> User {
        let id = self.users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);
        let user = User {
            id,
            nom: fields.nom,
            email: fields.email,
        };
        self.users.push(user.clone());
        user
    }

    pub fn update(&mut self, id: u64, patch: UserPatch) -> Option<User> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        if let Some(nom) = patch.nom {
            user.nom = nom;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        Some(user.clone())
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.users.retain(|u| u.id != id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_after_delete_does_not_reuse_live_id() {
        let mut users = UserStore::seeded();
        users.delete(1);

        let created = users.create(NewUser {
            nom: "Sara".to_string(),
            email: "sara@example.com".to_string(),
        });
        assert_eq!(created.id, 3);
        assert_eq!(users.list().len(), 2);
    }

    #[test]
    fn partial_update_keeps_email() {
        let mut users = UserStore::seeded();
        let updated = users
            .update(
                2,
                UserPatch {
                    nom: Some("Ahmed B.".to_string()),
                    email: None,
                },
            )
            .unwrap();

        assert_eq!(updated.nom, "Ahmed B.");
        assert_eq!(updated.email, "ahmed@example.com");
    }
}
