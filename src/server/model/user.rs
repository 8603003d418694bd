//! User domain models and parameters.

use crate::{
    model::{
        auth::RegisterDto,
        user::{CreateUserDto, PublicUserDto, UserDto},
    },
    server::{
        error::{
            validation::{FieldError, Validate, Violations},
            AppError,
        },
        util::multipart::{MultipartForm, UploadedFile},
    },
};

const MIN_PASSWORD_LENGTH: usize = 8;

/// Registered user, including the password hash.
///
/// The hash never leaves the server: both DTO conversions drop it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    pub is_admin: bool,
    /// Public path of the profile picture, if one was uploaded.
    pub pp_url: Option<String>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            name: self.name,
            email: self.email,
            is_admin: self.is_admin,
            pp_url: self.pp_url,
        }
    }

    /// Converts to the projection shown to other users (no email, admin flag or hash).
    pub fn into_public_dto(self) -> PublicUserDto {
        PublicUserDto {
            id: self.id,
            username: self.username,
            name: self.name,
            pp_url: self.pp_url,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            name: entity.name,
            email: entity.email,
            hashed_password: entity.hashed_password,
            is_admin: entity.is_admin,
            pp_url: entity.pp_url,
        }
    }
}

/// Input for creating a user, with the plain-text password still unhashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
            is_admin: dto.is_admin,
        }
    }

    /// Self-registration never grants admin.
    pub fn from_register_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
            is_admin: false,
        }
    }
}

/// Row values for inserting a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    pub is_admin: bool,
}

/// Partial update of a user row; `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub hashed_password: Option<String>,
    pub pp_url: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.hashed_password.is_none()
            && self.pp_url.is_none()
    }
}

/// Validated input of a profile update submitted as multipart form.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub picture: Option<UploadedFile>,
}

impl UpdateUserParams {
    /// Multipart field carrying the new profile picture.
    pub const PICTURE_FIELD: &'static str = "picture_file";

    /// Reads and validates an update form. Blank text fields count as omitted.
    ///
    /// # Returns
    /// - `Ok(UpdateUserParams)` - Validated update
    /// - `Err(AppError::Validation)` - Malformed email or too-short password
    pub fn from_form(id: i32, mut form: MultipartForm) -> Result<Self, AppError> {
        let mut violations = Violations::new();

        let email = form.non_blank("email").map(|e| e.trim().to_string());
        if let Some(ref email) = email {
            validate_email(&mut violations, email);
        }

        let password = form.non_blank("password").map(str::to_string);
        if let Some(ref password) = password {
            validate_password(&mut violations, password);
        }

        violations.into_result().map_err(AppError::Validation)?;

        Ok(Self {
            id,
            username: form.non_blank("username").map(|u| u.trim().to_string()),
            name: form.non_blank("name").map(|n| n.trim().to_string()),
            email,
            password,
            picture: form.take_file(Self::PICTURE_FIELD),
        })
    }
}

impl Validate for CreateUserDto {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Violations::new();
        violations.require_non_empty("username", &self.username);
        violations.require_non_empty("name", &self.name);
        validate_email(&mut violations, &self.email);
        validate_password(&mut violations, &self.password);
        violations.into_result()
    }
}

/// Accepts `local@domain.tld` shaped addresses.
pub fn validate_email(violations: &mut Violations, email: &str) {
    let valid = email
        .trim()
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
        });

    if !valid {
        violations.push("email", "email must be a valid email address");
    }
}

pub fn validate_password(violations: &mut Violations, password: &str) {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        violations.push(
            "password",
            format!("password must be at least {} characters", MIN_PASSWORD_LENGTH),
        );
    }
}
