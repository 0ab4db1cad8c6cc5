//! Account literals: profile, security center and checkout

use crate::tabs::tab_set;

// ─────────────────────────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────────────────────────

tab_set!(
    /// Account settings sections
    ProfileTab {
        Profile => "Profile",
        Notifications => "Notifications",
        Preferences => "Preferences",
        Billing => "Billing",
    }
);

pub mod profile {
    pub const TITLE: &str = "Account Settings";
    pub const SUBTITLE: &str = "Manage your profile and preferences";
    pub const NAME: &str = "Sarah Johnson";
    pub const EMAIL: &str = "sarah.johnson@email.com";
    pub const MEMBERSHIP: &str = "Pro Member";

    /// (label, value) rows on the profile card
    pub static SUMMARY: [(&str, &str); 4] = [
        ("Member since", "Jan 2024"),
        ("Courses completed", "5"),
        ("Learning hours", "142"),
        ("Certificates earned", "5"),
    ];

    /// Personal information form, as (field, value)
    pub static PERSONAL_INFO: [(&str, &str); 7] = [
        ("First Name", "Sarah"),
        ("Last Name", "Johnson"),
        ("Email Address", "sarah.johnson@email.com"),
        ("Phone Number", "+1 (555) 123-4567"),
        (
            "Bio",
            "Passionate about learning web development and data science. \
             Always looking to improve my skills!",
        ),
        ("Location", "San Francisco, CA"),
        ("Birthday", "1995-03-15"),
    ];

    /// (setting, enabled)
    pub static EMAIL_NOTIFICATIONS: [(&str, bool); 4] = [
        ("Course Updates", true),
        ("Learning Reminders", true),
        ("Achievements", true),
        ("Promotions", false),
    ];

    pub static PUSH_NOTIFICATIONS: [(&str, bool); 2] =
        [("Mobile Notifications", true), ("Desktop Notifications", false)];

    /// (preference, value)
    pub static LEARNING_PREFERENCES: [(&str, &str); 5] = [
        ("Language", "English"),
        ("Timezone", "Pacific Time (PT)"),
        ("Video Quality", "Auto (Recommended)"),
        ("Autoplay Next Lesson", "On"),
        ("Subtitles", "Off"),
    ];

    pub const PLAN: &str = "Pro Annual";
    pub const PLAN_RENEWAL: &str = "Renews on March 15, 2026 • $299.99/year";
    pub const CARD: &str = "•••• •••• •••• 4242";
    pub const CARD_EXPIRY: &str = "Expires 12/2026";

    /// (date, amount, status)
    pub static BILLING_HISTORY: [(&str, &str, &str); 3] = [
        ("Jan 15, 2026", "$89.99", "Paid"),
        ("Dec 20, 2025", "$89.99", "Paid"),
        ("Nov 18, 2025", "$89.99", "Paid"),
    ];
}

// ─────────────────────────────────────────────────────────────────
// Security
// ─────────────────────────────────────────────────────────────────

pub mod security {
    pub const TITLE: &str = "Security Settings";
    pub const SUBTITLE: &str = "Manage your account security and active devices";

    /// Active device cap shown in the device card
    pub const DEVICE_LIMIT: usize = 3;

    pub const DEVICE_LIMIT_WARNING: &str = "You've reached the maximum number of active \
        devices. Please log out from one device before signing in on a new one.";

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Device {
        pub name: &'static str,
        pub kind: &'static str,
        pub location: &'static str,
        pub last_active: &'static str,
        pub browser: &'static str,
        pub is_current: bool,
    }

    pub static DEVICES: [Device; 3] = [
        Device {
            name: "MacBook Pro",
            kind: "Desktop",
            location: "San Francisco, CA, USA",
            last_active: "2 minutes ago",
            browser: "Chrome 120",
            is_current: true,
        },
        Device {
            name: "iPhone 15 Pro",
            kind: "Mobile",
            location: "San Francisco, CA, USA",
            last_active: "5 hours ago",
            browser: "Safari Mobile",
            is_current: false,
        },
        Device {
            name: "iPad Air",
            kind: "Tablet",
            location: "Oakland, CA, USA",
            last_active: "2 days ago",
            browser: "Safari",
            is_current: false,
        },
    ];

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LoginAttempt {
        pub location: &'static str,
        pub device: &'static str,
        pub time: &'static str,
        pub success: bool,
    }

    pub static LOGIN_ACTIVITY: [LoginAttempt; 4] = [
        LoginAttempt {
            location: "San Francisco, CA, USA",
            device: "MacBook Pro • Chrome",
            time: "2 minutes ago",
            success: true,
        },
        LoginAttempt {
            location: "San Francisco, CA, USA",
            device: "iPhone 15 Pro • Safari",
            time: "5 hours ago",
            success: true,
        },
        LoginAttempt {
            location: "Oakland, CA, USA",
            device: "iPad Air • Safari",
            time: "2 days ago",
            success: true,
        },
        LoginAttempt {
            location: "Los Angeles, CA, USA",
            device: "Unknown Device • Chrome",
            time: "3 days ago",
            success: false,
        },
    ];

    pub const SCORE: u16 = 85;

    /// (check, satisfied)
    pub static SCORE_CHECKS: [(&str, bool); 4] = [
        ("Strong password", true),
        ("Two-factor enabled", true),
        ("Email verified", true),
        ("Add recovery email", false),
    ];

    pub const PASSWORD_FIELDS: [&str; 3] =
        ["Current Password", "New Password", "Confirm New Password"];

    pub const TWO_FACTOR_METHOD: &str = "Authenticator App";

    pub const QUICK_ACTIONS: [&str; 3] = [
        "Log Out All Devices",
        "Reset Password",
        "Download Security Report",
    ];

    pub const TIPS: [&str; 4] = [
        "Use a unique password",
        "Enable two-factor auth",
        "Review active devices regularly",
        "Never share your password",
    ];

    /// True when the device list is at the cap
    pub fn device_limit_reached() -> bool {
        DEVICES.len() >= DEVICE_LIMIT
    }
}

// ─────────────────────────────────────────────────────────────────
// Payment
// ─────────────────────────────────────────────────────────────────

tab_set!(
    /// Checkout payment method
    PaymentMethod {
        Card => "Credit/Debit Card",
        PayPal => "PayPal",
    }
);

pub mod payment {
    pub const TITLE: &str = "Complete Your Purchase";
    pub const SUBTITLE: &str = "Secure checkout powered by Stripe";
    pub const COURSE_TITLE: &str = "Complete JavaScript Masterclass 2026";
    pub const COURSE_INSTRUCTOR: &str = "by Sarah Johnson";

    pub const CARD_FIELDS: [&str; 4] = ["Card Number", "Cardholder Name", "Expiry Date", "CVV"];
    pub const BILLING_FIELDS: [&str; 3] = ["Country", "ZIP/Postal Code", "State/Province"];
    pub const PAYPAL_NOTICE: &str = "You'll be redirected to PayPal to complete your purchase";

    pub const INCLUDES: [&str; 4] = [
        "42 hours of video",
        "234 resources",
        "Lifetime access",
        "Certificate",
    ];

    /// Order summary rows, as (label, amount)
    pub static SUMMARY: [(&str, &str); 3] = [
        ("Original Price", "$149.99"),
        ("Discount (40% OFF)", "-$60.00"),
        ("Tax", "$0.00"),
    ];

    pub const TOTAL: &str = "$89.99";
    pub const GUARANTEE: &str = "30-Day Money-Back Guarantee";
}
