use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recruiter {
    pub id: Uuid,
    pub user: User,
    pub company: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub user: User,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRecruitersResponse {
    pub recruiters: Vec<Recruiter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCandidatesResponse {
    pub candidates: Vec<Candidate>,
}
