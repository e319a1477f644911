//! Generated client scripts.
//!
//! The two interactive behaviors on the site are a mobile menu toggle and
//! the mock contact form. Both follow the state models in
//! `saviour_site_core::state`; the form script is templated from those
//! constants so the markup, the script, and the Rust model cannot drift.

use saviour_site_core::state;

const CONTACT_FORM_TEMPLATE: &str = r#"// Contact form submission cycle: idle -> submitting -> submitted -> idle.
// The submission is simulated; nothing is transmitted anywhere.
(function () {
    const form = document.getElementById('contact-form');
    const success = document.getElementById('form-success');
    const submit = document.getElementById('contact-submit');
    const sendAnother = document.getElementById('send-another');
    if (!form || !success || !submit || !sendAnother) return;

    form.addEventListener('submit', (event) => {
        // Native required-field validation has already passed by the time
        // this fires; from here the cycle cannot fail or be cancelled.
        event.preventDefault();
        if (submit.disabled) return;
        submit.disabled = true;
        submit.textContent = '__SENDING_LABEL__';

        window.setTimeout(() => {
            form.reset();
            form.hidden = true;
            success.hidden = false;
            submit.disabled = false;
            submit.textContent = '__SUBMIT_LABEL__';
        }, __DELAY_MS__);
    });

    sendAnother.addEventListener('click', () => {
        success.hidden = true;
        form.hidden = false;
    });
})();
"#;

/// Script driving the contact form's idle/submitting/submitted cycle
pub fn contact_form_js() -> String {
    CONTACT_FORM_TEMPLATE
        .replace("__SENDING_LABEL__", state::SENDING_LABEL)
        .replace("__SUBMIT_LABEL__", state::SUBMIT_LABEL)
        .replace("__DELAY_MS__", &state::SUBMIT_DELAY_MS.to_string())
}

/// Script driving the mobile navigation toggle. Selecting any link inside
/// the mobile list also closes it.
pub fn nav_menu_js() -> &'static str {
    r#"// Mobile navigation: a single open/closed toggle.
(function () {
    const toggle = document.getElementById('nav-toggle');
    const menu = document.getElementById('nav-mobile');
    if (!toggle || !menu) return;

    toggle.addEventListener('click', () => {
        menu.hidden = !menu.hidden;
        toggle.setAttribute('aria-expanded', menu.hidden ? 'false' : 'true');
    });

    menu.querySelectorAll('a').forEach((link) => {
        link.addEventListener('click', () => {
            menu.hidden = true;
            toggle.setAttribute('aria-expanded', 'false');
        });
    });
})();
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_script_uses_the_model_constants() {
        let js = contact_form_js();
        assert!(js.contains("'Sending...'"));
        assert!(js.contains("'Send Message'"));
        assert!(js.contains(", 1500);"));
        assert!(!js.contains("__"), "unexpanded template placeholder");
    }

    #[test]
    fn form_script_disables_the_submit_control_while_pending() {
        let js = contact_form_js();
        assert!(js.contains("submit.disabled = true;"));
        assert!(js.contains("if (submit.disabled) return;"));
    }

    #[test]
    fn form_script_never_transmits() {
        let js = contact_form_js();
        assert!(!js.contains("fetch("));
        assert!(!js.contains("XMLHttpRequest"));
        assert!(js.contains("form.reset()"));
    }

    #[test]
    fn nav_script_closes_on_link_selection() {
        let js = nav_menu_js();
        assert!(js.contains("menu.hidden = !menu.hidden;"));
        assert!(js.contains("menu.querySelectorAll('a')"));
        assert!(js.contains("menu.hidden = true;"));
    }
}
