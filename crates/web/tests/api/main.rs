mod health_check;
mod helpers;
mod issue_token;
