//! Catalogue of protocol versions and XML security algorithm identifiers.
//!
//! Only identifiers are modelled here. Executing the algorithms belongs to the
//! security layer that consumes a validated PMode.

use super::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a closed enum with a canonical identifier, `Display` and
/// `TryFrom<&str>` parsing against that identifier.
macro_rules! identified_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $id:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// All known values in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the canonical identifier.
            #[must_use]
            pub const fn id(self) -> &'static str {
                match self {
                    $(Self::$variant => $id),+
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ParseEnumError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                let trimmed = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.id() == trimmed)
                    .ok_or_else(|| ParseEnumError::new($kind, value))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        }
    };
}

identified_enum! {
    /// SOAP envelope version of a leg.
    SoapVersion, "SOAP version" {
        /// SOAP 1.1.
        Soap11 => "1.1",
        /// SOAP 1.2, the AS4 default.
        Soap12 => "1.2",
    }
}

impl SoapVersion {
    /// Returns the SOAP envelope namespace URI.
    #[must_use]
    pub const fn namespace_uri(self) -> &'static str {
        match self {
            Self::Soap11 => "http://schemas.xmlsoap.org/soap/envelope/",
            Self::Soap12 => "http://www.w3.org/2003/05/soap-envelope",
        }
    }

    /// Returns `true` for the version mandated by AS4.
    #[must_use]
    pub const fn is_as4_default(self) -> bool {
        matches!(self, Self::Soap12)
    }
}

impl Default for SoapVersion {
    fn default() -> Self {
        Self::Soap12
    }
}

identified_enum! {
    /// WS-Security version of a leg.
    WssVersion, "WSS version" {
        /// WS-Security 1.0.
        Wss10 => "1.0",
        /// WS-Security 1.1.
        Wss11 => "1.1",
        /// WS-Security 1.1.1.
        Wss111 => "1.1.1",
    }
}

identified_enum! {
    /// XML digital signature algorithm.
    SignatureAlgorithm, "signature algorithm" {
        /// RSA with SHA-256.
        RsaSha256 => "http://www.w3.org/2001/04/xmldsig-more#rsa-sha256",
        /// RSA with SHA-384.
        RsaSha384 => "http://www.w3.org/2001/04/xmldsig-more#rsa-sha384",
        /// RSA with SHA-512.
        RsaSha512 => "http://www.w3.org/2001/04/xmldsig-more#rsa-sha512",
        /// ECDSA with SHA-256.
        EcdsaSha256 => "http://www.w3.org/2001/04/xmldsig-more#ecdsa-sha256",
        /// ECDSA with SHA-384.
        EcdsaSha384 => "http://www.w3.org/2001/04/xmldsig-more#ecdsa-sha384",
        /// ECDSA with SHA-512.
        EcdsaSha512 => "http://www.w3.org/2001/04/xmldsig-more#ecdsa-sha512",
        /// Pure `Ed25519`.
        Ed25519 => "http://www.w3.org/2021/04/xmldsig-more#eddsa-ed25519",
    }
}

identified_enum! {
    /// Digest algorithm used for signature references.
    DigestAlgorithm, "digest algorithm" {
        /// SHA-256.
        Sha256 => "http://www.w3.org/2001/04/xmlenc#sha256",
        /// SHA-384.
        Sha384 => "http://www.w3.org/2001/04/xmldsig-more#sha384",
        /// SHA-512.
        Sha512 => "http://www.w3.org/2001/04/xmlenc#sha512",
    }
}

identified_enum! {
    /// Symmetric content encryption algorithm.
    EncryptionAlgorithm, "encryption algorithm" {
        /// AES-128 in CBC mode.
        Aes128Cbc => "http://www.w3.org/2001/04/xmlenc#aes128-cbc",
        /// AES-192 in CBC mode.
        Aes192Cbc => "http://www.w3.org/2001/04/xmlenc#aes192-cbc",
        /// AES-256 in CBC mode.
        Aes256Cbc => "http://www.w3.org/2001/04/xmlenc#aes256-cbc",
        /// AES-128 in GCM mode.
        Aes128Gcm => "http://www.w3.org/2009/xmlenc11#aes128-gcm",
        /// AES-192 in GCM mode.
        Aes192Gcm => "http://www.w3.org/2009/xmlenc11#aes192-gcm",
        /// AES-256 in GCM mode.
        Aes256Gcm => "http://www.w3.org/2009/xmlenc11#aes256-gcm",
        /// Triple DES in CBC mode.
        TripleDesCbc => "http://www.w3.org/2001/04/xmlenc#tripledes-cbc",
    }
}

impl EncryptionAlgorithm {
    /// Returns the key size in bits.
    #[must_use]
    pub const fn key_bits(self) -> u32 {
        match self {
            Self::Aes128Cbc | Self::Aes128Gcm => 128,
            Self::Aes192Cbc | Self::Aes192Gcm | Self::TripleDesCbc => 192,
            Self::Aes256Cbc | Self::Aes256Gcm => 256,
        }
    }
}
