use serde::{Deserialize, Serialize};

use bookstore_db::{BookRecord, SellerRecord};
use bookstore_http::error::AppError;

use crate::modules::books::models::ReturnedBook;
use crate::modules::validation::check_text;

const MAX_NAME_LEN: usize = 50;
const MAX_E_MAIL_LEN: usize = 50;
const MAX_PASSWORD_LEN: usize = 20;

/// Payload for registering a seller
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingSeller {
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
    pub password: String,
}

impl IncomingSeller {
    /// Bounds the store itself does not express: presence and length
    pub fn validate(&self) -> Result<(), AppError> {
        let mut details = Vec::new();
        check_text(&mut details, "first_name", &self.first_name, MAX_NAME_LEN);
        check_text(&mut details, "last_name", &self.last_name, MAX_NAME_LEN);
        check_text(&mut details, "e_mail", &self.e_mail, MAX_E_MAIL_LEN);
        check_text(&mut details, "password", &self.password, MAX_PASSWORD_LEN);

        if details.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(
                details,
                "seller payload failed validation",
            ))
        }
    }
}

/// Seller fields exposed to clients; `password` never appears here.
/// Doubles as the update payload, whose `id` is ignored in favor of the
/// path parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnedSeller {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
}

impl ReturnedSeller {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut details = Vec::new();
        check_text(&mut details, "first_name", &self.first_name, MAX_NAME_LEN);
        check_text(&mut details, "last_name", &self.last_name, MAX_NAME_LEN);
        check_text(&mut details, "e_mail", &self.e_mail, MAX_E_MAIL_LEN);

        if details.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(
                details,
                "seller payload failed validation",
            ))
        }
    }
}

impl From<SellerRecord> for ReturnedSeller {
    fn from(record: SellerRecord) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            e_mail: record.e_mail,
        }
    }
}

/// Container shape for the list endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ReturnedAllSellers {
    pub sellers: Vec<ReturnedSeller>,
}

/// Detail view: public seller fields plus every owned book
#[derive(Debug, Clone, Serialize)]
pub struct ReturnedSellerWithBooks {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
    pub books: Vec<ReturnedBook>,
}

impl ReturnedSellerWithBooks {
    pub fn new(seller: SellerRecord, books: Vec<BookRecord>) -> Self {
        Self {
            id: seller.id,
            first_name: seller.first_name,
            last_name: seller.last_name,
            e_mail: seller.e_mail,
            books: books.into_iter().map(ReturnedBook::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returned_seller_drops_password() {
        let record = SellerRecord {
            id: 1,
            first_name: "Ivan".to_string(),
            last_name: "Sidorov".to_string(),
            e_mail: "sidorovi@yandex.ru".to_string(),
            password: "WeanQ*/+9$".to_string(),
        };

        let returned = ReturnedSeller::from(record);
        let as_json = serde_json::to_value(&returned).unwrap();

        assert_eq!(as_json["id"], 1);
        assert!(as_json.get("password").is_none());
    }

    #[test]
    fn overlong_password_fails_validation() {
        let seller = IncomingSeller {
            first_name: "Ivan".to_string(),
            last_name: "Sidorov".to_string(),
            e_mail: "sidorovi@yandex.ru".to_string(),
            password: "p".repeat(21),
        };

        assert!(seller.validate().is_err());
    }

    #[test]
    fn valid_payload_passes() {
        let seller = IncomingSeller {
            first_name: "Ivan".to_string(),
            last_name: "Sidorov".to_string(),
            e_mail: "sidorovi@yandex.ru".to_string(),
            password: "WeanQ*/+9$".to_string(),
        };

        assert!(seller.validate().is_ok());
    }
}
