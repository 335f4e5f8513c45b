//! Register Phone Use Case
//!
//! Customer registration by mobile number: the number is canonicalized, the
//! one-time code sent to it is checked, and the number is claimed if free.

use std::sync::Arc;

use platform::locale::transliterate_digits;

use crate::domain::repository::{OtpVerifier, PhoneRegistry};
use crate::domain::value_object::phone_number::PhoneNumber;
use crate::error::{AccessError, AccessResult};

/// Register phone input
pub struct RegisterPhoneInput {
    pub phone: String,
    pub otp_code: String,
}

/// Register phone output
pub struct RegisterPhoneOutput {
    pub phone: PhoneNumber,
}

/// Availability of a phone number for registration
pub struct PhoneAvailability {
    pub phone: PhoneNumber,
    pub available: bool,
}

/// Register phone use case
pub struct RegisterPhoneUseCase<R, O>
where
    R: PhoneRegistry + Send + Sync + 'static,
    O: OtpVerifier + Send + Sync + 'static,
{
    registry: Arc<R>,
    otp: Arc<O>,
}

impl<R, O> RegisterPhoneUseCase<R, O>
where
    R: PhoneRegistry + Send + Sync + 'static,
    O: OtpVerifier + Send + Sync + 'static,
{
    pub fn new(registry: Arc<R>, otp: Arc<O>) -> Self {
        Self { registry, otp }
    }

    /// Canonicalize a number and report whether it can still be registered
    pub async fn check_availability(&self, raw_phone: &str) -> AccessResult<PhoneAvailability> {
        let phone = parse_phone(raw_phone)?;
        let available = !self.registry.exists_by_phone(&phone).await?;

        Ok(PhoneAvailability { phone, available })
    }

    pub async fn execute(&self, input: RegisterPhoneInput) -> AccessResult<RegisterPhoneOutput> {
        let phone = parse_phone(&input.phone)?;

        let code = transliterate_digits(input.otp_code.trim());
        if code.is_empty() || !self.otp.verify(&phone, &code).await? {
            return Err(AccessError::OtpRejected);
        }

        if self.registry.exists_by_phone(&phone).await? {
            return Err(AccessError::PhoneNumberTaken);
        }

        self.registry.create(&phone).await?;

        tracing::info!(phone = %phone.masked(), "Phone number registered");

        Ok(RegisterPhoneOutput { phone })
    }
}

fn parse_phone(raw: &str) -> AccessResult<PhoneNumber> {
    PhoneNumber::new(raw).map_err(|e| {
        tracing::debug!(error = %e, "Rejected phone number");
        AccessError::InvalidPhoneNumber
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryRegistry {
        phones: Mutex<HashSet<String>>,
    }

    impl PhoneRegistry for MemoryRegistry {
        async fn exists_by_phone(&self, phone: &PhoneNumber) -> AccessResult<bool> {
            Ok(self.phones.lock().unwrap().contains(phone.as_str()))
        }

        async fn create(&self, phone: &PhoneNumber) -> AccessResult<()> {
            if !self.phones.lock().unwrap().insert(phone.as_str().to_string()) {
                return Err(AccessError::PhoneNumberTaken);
            }
            Ok(())
        }
    }

    /// Accepts a single fixed code
    struct FixedOtp(&'static str);

    impl OtpVerifier for FixedOtp {
        async fn verify(&self, _phone: &PhoneNumber, code: &str) -> AccessResult<bool> {
            Ok(code == self.0)
        }
    }

    fn use_case() -> (Arc<MemoryRegistry>, RegisterPhoneUseCase<MemoryRegistry, FixedOtp>) {
        let registry = Arc::new(MemoryRegistry::default());
        let use_case = RegisterPhoneUseCase::new(registry.clone(), Arc::new(FixedOtp("12345")));
        (registry, use_case)
    }

    fn input(phone: &str, otp_code: &str) -> RegisterPhoneInput {
        RegisterPhoneInput {
            phone: phone.to_string(),
            otp_code: otp_code.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_canonical_form() {
        let (registry, use_case) = use_case();

        let output = use_case.execute(input("0912 123 4567", "12345")).await.unwrap();

        assert_eq!(output.phone.as_str(), "+989121234567");
        assert!(registry.phones.lock().unwrap().contains("+989121234567"));
    }

    #[tokio::test]
    async fn test_register_accepts_persian_otp_digits() {
        let (_, use_case) = use_case();
        assert!(use_case.execute(input("09121234567", "۱۲۳۴۵")).await.is_ok());
    }

    #[tokio::test]
    async fn test_register_duplicate_in_other_form() {
        let (_, use_case) = use_case();
        use_case.execute(input("09121234567", "12345")).await.unwrap();

        let err = use_case
            .execute(input("+98 912 123 4567", "12345"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AccessError::PhoneNumberTaken));
    }

    #[tokio::test]
    async fn test_register_invalid_phone() {
        let (_, use_case) = use_case();
        let err = use_case.execute(input("+982112345678", "12345")).await.err().unwrap();
        assert!(matches!(err, AccessError::InvalidPhoneNumber));
    }

    #[tokio::test]
    async fn test_register_wrong_otp() {
        let (registry, use_case) = use_case();

        let err = use_case.execute(input("09121234567", "00000")).await.err().unwrap();
        assert!(matches!(err, AccessError::OtpRejected));

        let err = use_case.execute(input("09121234567", "  ")).await.err().unwrap();
        assert!(matches!(err, AccessError::OtpRejected));

        assert!(registry.phones.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_check_availability() {
        let (_, use_case) = use_case();

        let before = use_case.check_availability("۰۹۱۲۱۲۳۴۵۶۷").await.unwrap();
        assert!(before.available);
        assert_eq!(before.phone.as_str(), "+989121234567");

        use_case.execute(input("09121234567", "12345")).await.unwrap();

        let after = use_case.check_availability("9121234567").await.unwrap();
        assert!(!after.available);
    }
}
