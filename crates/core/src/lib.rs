#![forbid(unsafe_code)]

pub mod contact {
    /// The contact channels the `customers` schema accepts for
    /// `preferred_contact`. Stored as lowercase text.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum PreferredContact {
        Email,
        Phone,
        Mail,
        Other,
    }

    pub const ALL_CHANNELS: &[PreferredContact] = &[
        PreferredContact::Email,
        PreferredContact::Phone,
        PreferredContact::Mail,
        PreferredContact::Other,
    ];

    impl PreferredContact {
        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Email => "email",
                Self::Phone => "phone",
                Self::Mail => "mail",
                Self::Other => "other",
            }
        }

        /// Accepts surrounding whitespace and any ASCII case; form frontends
        /// submit capitalized labels like `Email`.
        pub fn parse(value: &str) -> Result<Self, PreferredContactError> {
            let value = value.trim();
            if value.is_empty() {
                return Err(PreferredContactError::Empty);
            }
            let lowered = value.to_ascii_lowercase();
            match lowered.as_str() {
                "email" => Ok(Self::Email),
                "phone" => Ok(Self::Phone),
                "mail" => Ok(Self::Mail),
                "other" => Ok(Self::Other),
                _ => Err(PreferredContactError::Unknown),
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum PreferredContactError {
        Empty,
        Unknown,
    }
}

pub mod record {
    /// Customer name: required, never empty once constructed.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CustomerName(String);

    impl CustomerName {
        pub fn as_str(&self) -> &str {
            &self.0
        }

        pub fn into_string(self) -> String {
            self.0
        }

        pub fn try_new(value: impl Into<String>) -> Result<Self, CustomerNameError> {
            let value = value.into();
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(CustomerNameError::Empty);
            }
            Ok(Self(trimmed.to_string()))
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum CustomerNameError {
        Empty,
    }

    /// Birthday in `YYYY-MM-DD`. Validation is structural plus calendar
    /// bounds; no timezone or date arithmetic.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Birthday(String);

    impl Birthday {
        pub fn as_str(&self) -> &str {
            &self.0
        }

        pub fn into_string(self) -> String {
            self.0
        }

        pub fn parse(value: &str) -> Result<Self, BirthdayError> {
            let value = value.trim();
            if value.is_empty() {
                return Err(BirthdayError::Empty);
            }
            let bytes = value.as_bytes();
            if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
                return Err(BirthdayError::InvalidFormat);
            }
            let digits_ok = value
                .char_indices()
                .all(|(index, ch)| matches!(index, 4 | 7) || ch.is_ascii_digit());
            if !digits_ok {
                return Err(BirthdayError::InvalidFormat);
            }

            let year: u16 = value[0..4].parse().map_err(|_| BirthdayError::InvalidFormat)?;
            let month: u8 = value[5..7].parse().map_err(|_| BirthdayError::InvalidFormat)?;
            let day: u8 = value[8..10].parse().map_err(|_| BirthdayError::InvalidFormat)?;

            if month == 0 || month > 12 {
                return Err(BirthdayError::MonthOutOfRange);
            }
            if day == 0 || day > days_in_month(year, month) {
                return Err(BirthdayError::DayOutOfRange);
            }

            Ok(Self(value.to_string()))
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum BirthdayError {
        Empty,
        InvalidFormat,
        MonthOutOfRange,
        DayOutOfRange,
    }

    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    fn is_leap_year(year: u16) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}
