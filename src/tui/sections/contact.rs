// Contact section - contact channels, social links, and the form
//
// The form renders from ContactForm state only: field buffers, focus,
// per-field errors, and the submission lifecycle. All mutation happens in
// the input layer; this module just draws what the state says.

use super::{divider, heading, prose, PageContext};
use crate::form::{FormField, SubmitState};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Spinner frames for the submitting indicator
const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

pub fn build(ctx: &PageContext) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let mut lines = Vec::new();

    lines.push(heading("Get In", "Touch", theme));
    lines.push(divider(ctx.width, theme));
    lines.extend(prose(
        "Let's discuss your project and build something amazing together!",
        ctx.width,
        theme.base_style(),
    ));
    lines.push(Line::default());

    push_contact_info(&mut lines, ctx);
    lines.push(Line::default());

    match ctx.form.state() {
        SubmitState::Submitted => push_success(&mut lines, ctx),
        _ => push_form(&mut lines, ctx),
    }

    lines
}

fn push_contact_info(lines: &mut Vec<Line<'static>>, ctx: &PageContext) {
    let theme = ctx.theme;
    let contact = &ctx.portfolio.contact;

    lines.push(Line::from(Span::styled(
        "Contact Information",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )));

    let channels = [
        ("✉", "Email", contact.email.as_str()),
        ("☎", "Phone", contact.phone.as_str()),
        ("⌂", "Location", contact.location.as_str()),
    ];
    for (icon, label, value) in channels {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", icon), Style::default().fg(theme.accent)),
            Span::styled(format!("{:<9}", label), theme.base_style()),
            Span::styled(value.to_string(), Style::default().fg(theme.link)),
        ]));
    }

    for social in &ctx.portfolio.social {
        lines.push(Line::from(vec![
            Span::styled("  ↗ ", Style::default().fg(theme.accent)),
            Span::styled(format!("{:<9}", social.label), theme.base_style()),
            Span::styled(social.url.clone(), Style::default().fg(theme.link)),
        ]));
    }
}

fn push_form(lines: &mut Vec<Line<'static>>, ctx: &PageContext) {
    let theme = ctx.theme;
    let form = ctx.form;
    let submitting = form.state() == SubmitState::Submitting;

    for &field in FormField::all() {
        let focused = ctx.form_active && form.focused() == field && !submitting;
        let value = form.value(field);

        let marker = if focused { "▸ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(theme.input_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.base_style()
        };

        let mut spans = vec![
            Span::styled(marker.to_string(), Style::default().fg(theme.input_focused)),
            Span::styled(format!("{:<14}", field.placeholder()), label_style),
        ];

        if value.is_empty() && !focused {
            spans.push(Span::styled(
                "…".to_string(),
                Style::default().fg(theme.placeholder),
            ));
        } else {
            spans.push(Span::styled(value.to_string(), theme.base_style()));
        }
        if focused {
            spans.push(Span::styled(
                "█".to_string(),
                Style::default().fg(theme.input_focused),
            ));
        }
        lines.push(Line::from(spans));

        if let Some(message) = form.error(field) {
            lines.push(Line::from(Span::styled(
                format!("    ⚠ {}", message),
                theme.error_style(),
            )));
        }
    }

    lines.push(Line::default());
    if submitting {
        let spinner = SPINNER[ctx.animation_frame % SPINNER.len()];
        lines.push(Line::from(Span::styled(
            format!("  {} Sending...", spinner),
            Style::default().fg(theme.accent),
        )));
    } else if ctx.form_active {
        lines.push(Line::from(Span::styled(
            "  [ ↵ Send Message ]",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  press ↵ to fill in the form",
            Style::default().fg(theme.placeholder),
        )));
    }
}

fn push_success(lines: &mut Vec<Line<'static>>, ctx: &PageContext) {
    let theme = ctx.theme;

    lines.push(Line::from(Span::styled(
        "  ✓ Thank You!",
        theme.success_style(),
    )));
    lines.extend(prose(
        "Your message has been sent successfully. I'll get back to you soon!",
        ctx.width.saturating_sub(2).max(10),
        theme.base_style(),
    ));
    lines.push(Line::from(Span::styled(
        "  press ↵ to send another message",
        Style::default().fg(theme.placeholder),
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;
    use crate::form::ContactForm;
    use crate::tui::layout::Breakpoint;
    use crate::tui::theme::ThemeKind;

    fn line_text(line: &Line) -> String {
        line.spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect::<String>()
    }

    fn build_with_form(form: &ContactForm, form_active: bool) -> Vec<String> {
        let portfolio = Portfolio::default();
        let theme = ThemeKind::Dark.theme();
        let ctx = PageContext {
            portfolio: &portfolio,
            theme: &theme,
            width: 80,
            breakpoint: Breakpoint::Normal,
            animation_frame: 0,
            form,
            form_active,
        };
        build(&ctx).iter().map(line_text).collect()
    }

    #[test]
    fn renders_every_field_and_contact_channel() {
        let form = ContactForm::new();
        let text = build_with_form(&form, false).join("\n");

        for &field in FormField::all() {
            assert!(text.contains(field.placeholder()), "{:?}", field);
        }
        let contact = Portfolio::default().contact;
        assert!(text.contains(&contact.email));
        assert!(text.contains(&contact.phone));
        assert!(text.contains(&contact.location));
    }

    #[test]
    fn validation_errors_appear_under_their_fields() {
        let mut form = ContactForm::new();
        form.validate();
        let text = build_with_form(&form, true).join("\n");

        assert!(text.contains("Full Name is required."));
        assert!(text.contains("Message is required."));
    }

    #[test]
    fn success_screen_replaces_the_form() {
        let mut form = ContactForm::new();
        for c in "Ada Lovelace".chars() {
            form.insert_char(c);
        }
        form.focus_next();
        for c in "ada@example.org".chars() {
            form.insert_char(c);
        }
        form.focus_next();
        for c in "44770090012".chars() {
            form.insert_char(c);
        }
        form.focus_next();
        for c in "Engines".chars() {
            form.insert_char(c);
        }
        form.focus_next();
        for c in "Shall we build one together?".chars() {
            form.insert_char(c);
        }
        assert!(form.try_submit());
        form.complete_submission();

        let text = build_with_form(&form, false).join("\n");
        assert!(text.contains("Thank You!"));
        assert!(!text.contains("Send Message"));
    }
}
