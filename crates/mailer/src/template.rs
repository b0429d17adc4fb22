//! HTML rendering for the appointment confirmation email.

use std::fmt::Write;

use salonbook_core::models::email::ConfirmationEmail;

use crate::config::SalonProfile;

pub fn confirmation_subject(email: &ConfirmationEmail) -> String {
    format!("Appointment Confirmed - {} {}", email.date, email.time)
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn detail_row(html: &mut String, label: &str, value: &str) {
    let _ = write!(
        html,
        r#"
          <div class="detail-row">
            <span class="detail-label">{label}:</span>
            <span class="detail-value">{value}</span>
          </div>"#
    );
}

/// Renders the confirmation body. Every caller-supplied value is escaped;
/// optional details without a value are left out.
pub fn render_confirmation_email(email: &ConfirmationEmail, salon: &SalonProfile) -> String {
    let salon_name = escape_html(&salon.name);

    let mut details = String::new();
    detail_row(&mut details, "Date", &escape_html(&email.date));
    detail_row(&mut details, "Time", &escape_html(&email.time));
    detail_row(&mut details, "Services", &escape_html(&email.service));
    if let Some(stylist) = &email.stylist {
        detail_row(&mut details, "Stylist", &escape_html(stylist));
    }
    if let Some(minutes) = email.total_duration {
        detail_row(&mut details, "Duration", &format!("{minutes} minutes"));
    }
    if let Some(contact) = &email.contact_number {
        detail_row(&mut details, "Contact Number", &escape_html(contact));
    }
    if let Some(total) = email.total_price {
        detail_row(&mut details, "Total Paid", &format!("R{total:.2}"));
    }

    let contact = match &salon.contact_email {
        Some(address) => format!(
            "<p><strong>Need to make changes?</strong> Contact us at {}.</p>",
            escape_html(address)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Appointment Confirmation</title>
    <style>
      body {{ font-family: Arial, sans-serif; margin: 0; padding: 20px; background-color: #f5f5f5; }}
      .container {{ max-width: 600px; margin: 0 auto; background-color: white; border-radius: 8px; }}
      .header {{ background: #c68d8d; color: white; padding: 30px; text-align: center; }}
      .content {{ padding: 30px; }}
      .detail-row {{ display: flex; justify-content: space-between; border-bottom: 1px solid #eee; padding: 8px 0; }}
      .detail-label {{ font-weight: bold; color: #333; }}
      .detail-value {{ color: #666; }}
      .footer {{ background-color: #f8f8f8; padding: 20px; text-align: center; color: #666; font-size: 14px; }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <div class="logo">{salon_name}</div>
        <h1>Appointment Confirmed!</h1>
      </div>
      <div class="content">
        <p>Dear {customer},</p>
        <p>Thank you for booking with {salon_name}! Your appointment has been confirmed.</p>
        <div class="appointment-details">
          <h3>Appointment Details</h3>{details}
        </div>
        <h3>Important Information:</h3>
        <ul>
          <li>Please arrive 10 minutes before your appointment time</li>
          <li>To reschedule or cancel, please contact us at least 24 hours in advance</li>
        </ul>
        {contact}
      </div>
      <div class="footer">
        <p>Thank you for choosing {salon_name}!</p>
        <p>This is an automated confirmation email. Please do not reply to this email.</p>
      </div>
    </div>
  </body>
</html>
"#,
        customer = escape_html(&email.customer_name),
    )
}
