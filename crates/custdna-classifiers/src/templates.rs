//! Content template banks used when an interaction arrives without content

use custdna_core::{Channel, RandomSource};

const EMAIL: [&str; 8] = [
    "Customer emailed asking about an unexpected charge on the latest invoice",
    "Follow-up email requesting an update on a pending refund",
    "Customer wrote in to change the billing address on the account",
    "Email inquiry about upgrading to the annual plan",
    "Customer sent screenshots of an error shown during checkout",
    "Request to cancel an order placed by mistake",
    "Customer asked for a copy of last month's receipt",
    "Email asking how to add a second user to the account",
];

const PHONE: [&str; 8] = [
    "Customer called about a delayed delivery",
    "Phone call to reset account password after lockout",
    "Caller wanted to dispute a late payment fee",
    "Customer phoned to walk through setting up a new device",
    "Call regarding a warranty claim for a faulty unit",
    "Customer called to confirm an appointment time",
    "Caller asked to speak to a supervisor about a previous ticket",
    "Phone request to update contact details",
];

const CHAT: [&str; 8] = [
    "Live chat about tracking a recent shipment",
    "Chat session to apply a discount code that was rejected",
    "Customer asked in chat which plan fits a small team",
    "Quick chat to confirm store opening hours",
    "Chat about a login loop on the mobile app",
    "Customer used chat to request an invoice in PDF",
    "Chat session to swap the size of an item in an open order",
    "Customer messaged support about a missing confirmation email",
];

const SOCIAL: [&str; 8] = [
    "Customer posted publicly about long wait times",
    "Direct message asking when an item will be back in stock",
    "Customer tagged the brand in a post about a damaged package",
    "Social reply praising a recent support agent",
    "Customer asked via direct message about the returns policy",
    "Public comment reporting an outage on the website",
    "Direct message following up on an unanswered email",
    "Customer shared feedback on a new feature in a post",
];

/// Channel-specific phrase banks
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTemplates;

impl ContentTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Bank for a channel; unknown channels share the email bank
    pub fn bank(&self, channel: &Channel) -> &'static [&'static str] {
        match channel {
            Channel::Phone => &PHONE,
            Channel::Chat => &CHAT,
            Channel::Social => &SOCIAL,
            Channel::Email | Channel::Other(_) => &EMAIL,
        }
    }

    /// Random phrase for a channel
    pub fn pick(&self, channel: &Channel, rng: &mut dyn RandomSource) -> String {
        let bank = self.bank(channel);
        bank[rng.index(bank.len())].to_string()
    }
}
