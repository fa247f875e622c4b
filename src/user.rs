use crate::{
    ArcUserRepository, ServiceError, ServiceResult, jwt::generate_jwt,
    persistence::users::UserUpdate, team::TeamName,
};

pub type Username = String;

#[derive(Clone, Debug)]
pub struct User {
    pub id: i64,
    pub username: Username,
    pub password_hash: String,
    pub favorite_team: Option<TeamName>,
}

pub trait UserService {
    fn register(
        &self,
        username: &str,
        password: &str,
        favorite_team: Option<TeamName>,
    ) -> ServiceResult<()>;
    fn login(&self, username: &str, password: &str) -> ServiceResult<String>;
    fn get_user(&self, username: &str) -> ServiceResult<User>;
    fn set_favorite_team(&self, username: &str, favorite_team: &str) -> ServiceResult<()>;
}

pub struct UserServiceImpl {
    user_repository: ArcUserRepository,
}

impl UserServiceImpl {
    pub fn new(user_repository: ArcUserRepository) -> Self {
        Self { user_repository }
    }

    fn validate_username(username: &str) -> ServiceResult<()> {
        if username.len() < 3 || username.len() > 20 {
            return ServiceError::bad_request("Username must be between 3 and 20 characters");
        }
        if username
            .chars()
            .next()
            .is_none_or(|c| !c.is_ascii_alphabetic())
        {
            return ServiceError::bad_request("Username must start with a letter");
        }
        if username
            .chars()
            .any(|c| !c.is_ascii_alphanumeric() && c != '_')
        {
            return ServiceError::bad_request("Username must be alphanumeric");
        }
        Ok(())
    }

    fn validate_password(password: &str) -> ServiceResult<()> {
        if password.len() < 6 {
            return ServiceError::bad_request("Password must be at least 6 characters");
        }
        Ok(())
    }
}

impl UserService for UserServiceImpl {
    fn register(
        &self,
        username: &str,
        password: &str,
        favorite_team: Option<TeamName>,
    ) -> ServiceResult<()> {
        Self::validate_username(username)?;
        Self::validate_password(password)?;
        if self.user_repository.get_user_by_name(username)?.is_some() {
            return ServiceError::not_possible("Username already taken");
        }
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| ServiceError::Internal(format!("Failed to hash password: {}", e)))?;
        self.user_repository.create_user(&User {
            id: 0, // assigned by the database
            username: username.to_string(),
            password_hash,
            favorite_team,
        })?;
        log::info!("Registered user {}", username);
        Ok(())
    }

    fn login(&self, username: &str, password: &str) -> ServiceResult<String> {
        let Some(user) = self.user_repository.get_user_by_name(username)? else {
            return ServiceError::unauthorized("Invalid username or password");
        };
        let valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| ServiceError::Internal(format!("Failed to verify password: {}", e)))?;
        if !valid {
            log::info!("Failed login attempt for user {}", username);
            return ServiceError::unauthorized("Invalid username or password");
        }
        Ok(generate_jwt(&user.username))
    }

    fn get_user(&self, username: &str) -> ServiceResult<User> {
        match self.user_repository.get_user_by_name(username)? {
            Some(user) => Ok(user),
            None => ServiceError::not_found("User not found"),
        }
    }

    fn set_favorite_team(&self, username: &str, favorite_team: &str) -> ServiceResult<()> {
        let user = self.get_user(username)?;
        self.user_repository.update_user(
            user.id,
            &UserUpdate {
                favorite_team: Some(favorite_team.to_string()),
                ..Default::default()
            },
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::persistence::users::MockUserRepository;

    fn service() -> UserServiceImpl {
        UserServiceImpl::new(Arc::new(Box::new(MockUserRepository::default())))
    }

    #[test]
    fn test_validate_username() {
        assert!(UserServiceImpl::validate_username("fan_42").is_ok());
        assert!(UserServiceImpl::validate_username("ab").is_err());
        assert!(UserServiceImpl::validate_username("1fan").is_err());
        assert!(UserServiceImpl::validate_username("no spaces").is_err());
    }

    #[test]
    fn test_register_and_login() {
        let service = service();
        service
            .register("courtfan", "secret1", Some("Boston Celtics".to_string()))
            .unwrap();
        let token = service.login("courtfan", "secret1").unwrap();
        assert!(!token.is_empty());

        let user = service.get_user("courtfan").unwrap();
        assert_eq!(user.favorite_team.as_deref(), Some("Boston Celtics"));
        assert_ne!(user.password_hash, "secret1");
    }

    #[test]
    fn test_login_with_wrong_password() {
        let service = service();
        service.register("courtfan", "secret1", None).unwrap();
        let result = service.login("courtfan", "wrong");
        assert!(matches!(result, Err(ServiceError::Unauthorized(_))));
    }

    #[test]
    fn test_register_duplicate_username() {
        let service = service();
        service.register("courtfan", "secret1", None).unwrap();
        let result = service.register("courtfan", "secret2", None);
        assert!(matches!(result, Err(ServiceError::NotPossible(_))));
    }

    #[test]
    fn test_set_favorite_team() {
        let service = service();
        service.register("courtfan", "secret1", None).unwrap();
        service
            .set_favorite_team("courtfan", "Denver Nuggets")
            .unwrap();
        let user = service.get_user("courtfan").unwrap();
        assert_eq!(user.favorite_team.as_deref(), Some("Denver Nuggets"));
    }
}
