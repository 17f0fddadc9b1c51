use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::validate;

pub const USER_REQUIRED_FIELDS: &[&str] = &["name", "email", "avatar"];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Staff => "Staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Manager" => Ok(Role::Manager),
            "Staff" => Ok(Role::Staff),
            other => Err(AppError::Validation(format!("{other} is not a valid role"))),
        }
    }
}

/// Body of `POST /api/users`. `role` stays a raw string so an unknown value
/// is a validation error rather than a JSON error.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RUserCreate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub active: Option<bool>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RUserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub active: Option<bool>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
    pub active: bool,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DBUserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub avatar: Option<String>,
    pub active: Option<bool>,
    pub phone: Option<String>,
}

impl RUserCreate {
    pub fn validate(self) -> Result<DBUserCreate, AppError> {
        validate::require_fields(
            &[
                validate::is_supplied(&self.name),
                validate::is_supplied(&self.email),
                validate::is_supplied(&self.avatar),
            ],
            USER_REQUIRED_FIELDS,
        )?;

        let (Some(name), Some(email), Some(avatar)) = (self.name, self.email, self.avatar) else {
            return Err(AppError::MissingFields(USER_REQUIRED_FIELDS));
        };

        Ok(DBUserCreate {
            name: validate::required_trimmed(&name, "User name is required")?,
            email: validate::email(&email)?,
            role: self.role.as_deref().map(Role::from_str).transpose()?.unwrap_or_default(),
            avatar: validate::required(avatar, "Avatar URL is required")?,
            active: self.active.unwrap_or(true),
            phone: self.phone.map(validate::phone).transpose()?,
        })
    }
}

impl RUserUpdate {
    pub fn validate(self) -> Result<DBUserPatch, AppError> {
        Ok(DBUserPatch {
            name: self
                .name
                .map(|v| validate::required_trimmed(&v, "User name is required"))
                .transpose()?,
            email: self.email.as_deref().map(validate::email).transpose()?,
            role: self.role.as_deref().map(Role::from_str).transpose()?,
            avatar: self
                .avatar
                .map(|v| validate::required(v, "Avatar URL is required"))
                .transpose()?,
            active: self.active,
            phone: self.phone.map(validate::phone).transpose()?,
        })
    }
}
