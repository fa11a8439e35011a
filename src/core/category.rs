use serde::{Deserialize, Serialize};

/// Static configuration for one service line.
#[derive(Debug, Clone, Copy)]
pub struct CategoryConfig {
    pub name: &'static str,
    pub prefix: &'static str,
    pub label: &'static str,
    pub services: &'static [&'static str],
}

/// A bank service line with its own ticket counter and waiting queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceCategory {
    Teller,
    CustomerService,
    Loan,
    Investment,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Teller,
        ServiceCategory::CustomerService,
        ServiceCategory::Loan,
        ServiceCategory::Investment,
    ];

    /// The string key used by kiosk front-ends to select a category.
    pub fn key(&self) -> &'static str {
        match self {
            ServiceCategory::Teller => "TELLER",
            ServiceCategory::CustomerService => "CS",
            ServiceCategory::Loan => "LOAN",
            ServiceCategory::Investment => "INVESTMENT",
        }
    }

    /// Look up a category from its kiosk key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }

    pub fn config(&self) -> &'static CategoryConfig {
        match self {
            ServiceCategory::Teller => &CategoryConfig {
                name: "Teller",
                prefix: "T",
                label: "💰",
                services: &[
                    "Setor Tunai",
                    "Tarik Tunai",
                    "Transfer",
                    "Pembayaran Tagihan",
                ],
            },
            ServiceCategory::CustomerService => &CategoryConfig {
                name: "Customer Service",
                prefix: "C",
                label: "👤",
                services: &["Buka Rekening", "Kartu ATM", "Mobile Banking", "Pengaduan"],
            },
            ServiceCategory::Loan => &CategoryConfig {
                name: "Pinjaman",
                prefix: "L",
                label: "🏠",
                services: &["KTA", "KPR", "Kredit Kendaraan"],
            },
            ServiceCategory::Investment => &CategoryConfig {
                name: "Investasi",
                prefix: "I",
                label: "📈",
                services: &["Deposito", "Konsultasi Keuangan"],
            },
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
