//! Document-level setup done once per application start: the page title and
//! the site stylesheet (including the hero blob keyframes).

use std::sync::Once;

use log::{debug, warn};
use stylist::GlobalStyle;

use crate::config;

static INIT: Once = Once::new();

pub fn init_document() {
    run_once(&INIT, apply_document_setup);
}

fn run_once(once: &Once, setup: impl FnOnce()) {
    once.call_once(setup);
}

fn apply_document_setup() {
    match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document.set_title(config::SITE_TITLE),
        None => warn!("no document available, title not set"),
    }

    match GlobalStyle::new(SITE_CSS) {
        Ok(style) => debug!("registered site stylesheet ({} bytes)", style.get_style_str().len()),
        Err(e) => warn!("failed to register site stylesheet: {}", e),
    }
}

const SITE_CSS: &str = r#"
* {
    box-sizing: border-box;
}
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #1f2937;
    background: #ffffff;
}
img {
    max-width: 100%;
    display: block;
}
a {
    color: inherit;
    text-decoration: none;
}
h1, h2, h3, h4 {
    color: #1e3a8a;
    margin: 0 0 0.75rem 0;
}
p {
    margin: 0 0 1rem 0;
    line-height: 1.6;
}
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1rem;
}
.container.narrow {
    max-width: 1024px;
}
.accent {
    color: #7e22ce;
}
.accent-light {
    color: #c084fc;
}
.muted {
    color: #4b5563;
}
.small {
    font-size: 0.85rem;
}
.clamp {
    display: -webkit-box;
    -webkit-line-clamp: 3;
    -webkit-box-orient: vertical;
    overflow: hidden;
}
.pill {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: #f3e8ff;
    color: #6b21a8;
    font-size: 0.85rem;
    font-weight: 500;
    margin-bottom: 0.5rem;
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.85rem 2rem;
    border-radius: 9999px;
    border: 1px solid transparent;
    font-size: 1rem;
    cursor: pointer;
    transition: background-color 0.3s, color 0.3s, border-color 0.3s;
}
.btn-primary {
    background: #7e22ce;
    color: #ffffff;
}
.btn-primary:hover {
    background: #6b21a8;
}
.btn-primary:disabled {
    opacity: 0.7;
    cursor: not-allowed;
}
.btn-outline {
    border-color: #d1d5db;
    background: transparent;
}
.btn-outline:hover {
    border-color: #7e22ce;
    color: #7e22ce;
}
.btn-light {
    background: #ffffff;
    color: #7e22ce;
    font-weight: 700;
}
.btn-dark {
    background: #1e3a8a;
    color: #ffffff;
}
.btn-ghost {
    background: transparent;
    color: #1e3a8a;
}
.btn-block {
    width: 100%;
}
.text-link {
    color: #7e22ce;
    font-weight: 500;
}

.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    padding: 1.25rem 0;
    background: transparent;
    transition: all 0.3s;
}
.top-nav.scrolled {
    background: #ffffff;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    padding: 0.75rem 0;
}
.nav-content {
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: #1e3a8a;
}
.nav-desktop {
    display: flex;
    gap: 2rem;
}
.nav-item {
    position: relative;
    display: flex;
    align-items: center;
    gap: 0.25rem;
}
.nav-link:hover, .nav-dropdown-link:hover {
    color: #7e22ce;
}
.nav-dropdown {
    position: absolute;
    top: 100%;
    left: 0;
    width: 12rem;
    background: #ffffff;
    border-radius: 0.375rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    padding: 0.25rem 0;
    opacity: 0;
    visibility: hidden;
    transition: all 0.2s;
}
.nav-item:hover .nav-dropdown {
    opacity: 1;
    visibility: visible;
}
.nav-dropdown-link {
    display: block;
    padding: 0.5rem 1rem;
    font-size: 0.9rem;
}
.chevron {
    display: inline-block;
    transition: transform 0.2s;
}
.chevron.rotated {
    transform: rotate(180deg);
}
.burger-menu {
    display: none;
    background: none;
    border: none;
    font-size: 1.5rem;
    cursor: pointer;
}
.mobile-menu {
    display: none;
}
.mobile-nav-row {
    display: flex;
    justify-content: space-between;
    padding: 0.5rem 0.75rem;
}
.mobile-dropdown {
    padding-left: 1rem;
}
.mobile-dropdown-link {
    display: block;
    padding: 0.5rem 0.75rem;
    font-size: 0.9rem;
}
.mobile-cta {
    padding: 0.5rem 0.75rem;
}

.hero {
    position: relative;
    overflow: hidden;
    padding: 8rem 0 6rem 0;
}
.hero-gradient {
    position: absolute;
    inset: 0;
    background: linear-gradient(135deg, #eff6ff, #faf5ff);
}
.blob {
    position: absolute;
    width: 18rem;
    height: 18rem;
    border-radius: 9999px;
    filter: blur(64px);
    opacity: 0.2;
    mix-blend-mode: multiply;
}
.blob-purple {
    top: -2.5rem;
    right: -2.5rem;
    background: #e9d5ff;
}
.blob-blue {
    top: 0;
    left: -1rem;
    background: #bfdbfe;
}
.blob-orange {
    bottom: -2rem;
    left: 5rem;
    background: #fed7aa;
}
@keyframes blob {
    0% {
        transform: translate(0px, 0px) scale(1);
    }
    33% {
        transform: translate(30px, -50px) scale(1.1);
    }
    66% {
        transform: translate(-20px, 20px) scale(0.9);
    }
    100% {
        transform: translate(0px, 0px) scale(1);
    }
}
.animate-blob {
    animation: blob 7s infinite;
}
.animation-delay-2000 {
    animation-delay: 2s;
}
.animation-delay-4000 {
    animation-delay: 4s;
}
.hero-content {
    position: relative;
    z-index: 10;
    display: flex;
    align-items: center;
    gap: 3rem;
}
.hero-copy, .hero-visual {
    flex: 1;
}
.hero h1 {
    font-size: 3.5rem;
    line-height: 1.1;
}
.hero-subtitle {
    font-size: 1.125rem;
    color: #4b5563;
    max-width: 32rem;
}
.hero-actions {
    display: flex;
    gap: 1rem;
}
.hero-visual {
    position: relative;
}
.hero-frame {
    position: relative;
    background: #ffffff;
    padding: 0.5rem;
    border-radius: 0.5rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
}
.badge {
    position: absolute;
    display: flex;
    align-items: center;
    gap: 1rem;
    background: #ffffff;
    padding: 1rem;
    border-radius: 0.5rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.badge p {
    margin: 0;
}
.badge-clients {
    bottom: -2.5rem;
    left: -2.5rem;
}
.badge-growth {
    top: -1.25rem;
    right: -1.25rem;
    transform: rotate(3deg);
}
.badge-value {
    font-size: 0.9rem;
    font-weight: 500;
}
.badge-label {
    font-size: 0.75rem;
    color: #6b7280;
}
.avatar-stack {
    display: flex;
}
.avatar-stack img {
    width: 2rem;
    height: 2rem;
    border-radius: 9999px;
    border: 2px solid #ffffff;
    margin-left: -0.5rem;
    object-fit: cover;
}
.trend {
    color: #f97316;
    font-size: 1.5rem;
}

.section {
    padding: 5rem 0;
}
.section.tinted {
    background: #f9fafb;
}
.section.soft-blue {
    background: #eff6ff;
}
.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}
.section-heading h2 {
    font-size: 2.25rem;
}
.section-heading p {
    color: #4b5563;
    max-width: 42rem;
    margin: 0 auto;
}
.card-grid {
    display: grid;
    gap: 2rem;
}
.card-grid.four {
    grid-template-columns: repeat(4, 1fr);
}
.card-grid.three {
    grid-template-columns: repeat(3, 1fr);
}
.card {
    background: #ffffff;
    border-radius: 0.5rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    overflow: hidden;
}
.card.lift {
    padding: 2rem;
    transition: transform 0.3s;
}
.card.lift:hover {
    transform: translateY(-0.5rem);
}
.card-icon {
    font-size: 2.5rem;
    margin-bottom: 1.5rem;
}
.stat {
    text-align: center;
}
.stat-value {
    font-size: 2.25rem;
}
.check-list {
    list-style: none;
    padding: 0;
    margin: 0 0 1.5rem 0;
}
.check-list li {
    margin-bottom: 0.5rem;
}
.check-list li::before {
    content: "✓";
    color: #22c55e;
    margin-right: 0.5rem;
}
.centered-cta {
    margin-top: 4rem;
    text-align: center;
}
.cta-band {
    margin-top: 4rem;
    padding: 2.5rem;
    border-radius: 0.5rem;
    text-align: center;
    color: #ffffff;
    background: linear-gradient(90deg, #7e22ce, #1e3a8a);
}
.cta-band h3 {
    color: #ffffff;
    font-size: 1.75rem;
}
.cta-band p {
    color: #f3e8ff;
}

.case-card {
    cursor: pointer;
}
.case-image {
    position: relative;
    height: 15rem;
    overflow: hidden;
}
.case-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.5s;
}
.case-card:hover .case-image img {
    transform: scale(1.05);
}
.case-overlay {
    position: absolute;
    inset: 0;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    padding: 1rem;
    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
    opacity: 0;
    transition: opacity 0.3s;
}
.case-overlay h3 {
    color: #ffffff;
}
.case-card:hover .case-overlay {
    opacity: 1;
}
.case-summary {
    padding: 1.5rem;
}
.modal-backdrop {
    position: fixed;
    inset: 0;
    z-index: 60;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: rgba(0, 0, 0, 0.5);
}
.modal {
    background: #ffffff;
    border-radius: 0.5rem;
    max-width: 56rem;
    width: 100%;
    max-height: 90vh;
    overflow-y: auto;
}
.modal-hero {
    position: relative;
}
.modal-hero img {
    width: 100%;
    height: 16rem;
    object-fit: cover;
}
.modal-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    border: none;
    border-radius: 9999px;
    background: #ffffff;
    padding: 0.5rem 0.75rem;
    cursor: pointer;
}
.modal-body {
    padding: 2rem;
}
.modal-actions {
    display: flex;
    justify-content: flex-end;
    gap: 1rem;
    margin-top: 2rem;
}

.carousel {
    position: relative;
    max-width: 64rem;
    margin: 0 auto;
}
.carousel-window {
    overflow: hidden;
}
.carousel-track {
    display: flex;
    transition: transform 0.5s ease-in-out;
}
.carousel-slide {
    flex: 0 0 100%;
    padding: 0 1rem;
}
.quote-card {
    padding: 2.5rem;
}
.quote-card blockquote {
    margin: 0 0 2rem 0;
    font-size: 1.25rem;
    font-style: italic;
    color: #374151;
}
.star {
    color: #d1d5db;
    font-size: 1.1rem;
}
.star.filled {
    color: #facc15;
}
.quote-author {
    display: flex;
    align-items: center;
    gap: 1rem;
}
.quote-author img {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 9999px;
    object-fit: cover;
}
.carousel-arrow {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    border: none;
    border-radius: 9999px;
    background: #ffffff;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    padding: 0.5rem 1rem;
    font-size: 1.5rem;
    cursor: pointer;
}
.carousel-arrow.left {
    left: -1.5rem;
}
.carousel-arrow.right {
    right: -1.5rem;
}
.carousel-dots {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    margin-top: 2rem;
}
.dot {
    width: 0.75rem;
    height: 0.75rem;
    border: none;
    border-radius: 9999px;
    background: #d1d5db;
    cursor: pointer;
}
.dot.active {
    background: #7e22ce;
}

.member-photo {
    position: relative;
    height: 18rem;
    overflow: hidden;
}
.member-photo img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}
.member-overlay {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: flex-end;
    padding: 1.5rem;
    background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
    opacity: 0;
    transition: opacity 0.3s;
    color: #ffffff;
}
.member-card:hover .member-overlay {
    opacity: 1;
}
.member-info {
    padding: 1.5rem;
}
.social-row {
    display: flex;
    gap: 0.75rem;
}
.careers {
    margin-top: 4rem;
    display: flex;
    gap: 2rem;
    align-items: center;
    background: #f9fafb;
    border-radius: 0.5rem;
    padding: 3rem;
}
.careers-copy {
    flex: 2;
}
.openings {
    flex: 1;
    padding: 1.5rem;
}
.openings ul {
    list-style: none;
    padding: 0;
    margin: 0;
}
.openings li {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 0.75rem;
}

.post-image {
    height: 12rem;
    overflow: hidden;
}
.post-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}
.post-body {
    padding: 1.5rem;
}
.post-meta {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
}
.push-right {
    margin-left: auto;
}
.post-footer {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.contact-card {
    display: flex;
    background: #ffffff;
    border-radius: 0.5rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    overflow: hidden;
}
.contact-details {
    flex: 2;
    padding: 3rem;
    background: #1e3a8a;
    color: #ffffff;
}
.contact-details h3, .contact-details h4 {
    color: #ffffff;
}
.contact-details .muted {
    color: #bfdbfe;
}
.contact-details dt {
    font-weight: 500;
    margin-top: 1.25rem;
}
.contact-details dd {
    margin: 0.25rem 0 0 0;
    opacity: 0.75;
}
.contact-body {
    flex: 3;
    padding: 3rem;
}
.field-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1.5rem;
    margin-bottom: 1.5rem;
}
.field {
    margin-bottom: 1.5rem;
}
.field label, .field-label {
    display: block;
    font-size: 0.875rem;
    font-weight: 500;
    color: #374151;
    margin-bottom: 0.25rem;
}
.input {
    width: 100%;
    padding: 0.65rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    font: inherit;
}
.input:focus {
    outline: none;
    border-color: transparent;
    box-shadow: 0 0 0 2px #a855f7;
}
.input.invalid {
    border-color: #ef4444;
}
.field-error {
    margin: 0.25rem 0 0 0;
    font-size: 0.875rem;
    color: #ef4444;
}
.service-options {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 0.5rem 1rem;
}
.service-option {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.service-option label {
    margin: 0;
    font-weight: 400;
}
.spinner {
    display: inline-block;
    width: 1.25rem;
    height: 1.25rem;
    border: 3px solid rgba(255, 255, 255, 0.3);
    border-top-color: #ffffff;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}
@keyframes spin {
    to {
        transform: rotate(360deg);
    }
}
.result-panel {
    height: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 2rem 0;
}
.result-icon {
    width: 4rem;
    height: 4rem;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
    margin-bottom: 1.5rem;
}
.result-icon.success {
    background: #dcfce7;
    color: #22c55e;
}
.result-icon.failure {
    background: #fee2e2;
    color: #ef4444;
}

.site-footer {
    background: #1e3a8a;
    color: #ffffff;
    padding: 4rem 0 2rem 0;
}
.site-footer h3 {
    color: #ffffff;
    font-size: 1.125rem;
    margin-bottom: 1.5rem;
}
.footer-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 3rem;
}
.footer-blurb, .footer-links a, .footer-contact, .footer-contact a, .footer-bottom, .footer-legal a {
    color: #bfdbfe;
}
.footer-links a:hover, .footer-contact a:hover, .footer-legal a:hover {
    color: #c084fc;
}
.footer-links, .footer-contact {
    list-style: none;
    padding: 0;
    margin: 0;
}
.footer-links li, .footer-contact li {
    margin-bottom: 0.75rem;
}
.footer-bottom {
    margin-top: 4rem;
    padding-top: 2rem;
    border-top: 1px solid #1e40af;
    display: flex;
    justify-content: space-between;
    font-size: 0.875rem;
}
.footer-legal {
    display: flex;
    gap: 2rem;
}

@media (max-width: 768px) {
    .nav-desktop, .nav-cta {
        display: none;
    }
    .burger-menu {
        display: block;
    }
    .mobile-menu.open {
        display: block;
        margin: 1rem;
        padding: 0.5rem;
        background: #ffffff;
        border-radius: 0.375rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .hero-content, .contact-card, .careers, .footer-bottom {
        flex-direction: column;
    }
    .hero h1 {
        font-size: 2.25rem;
    }
    .badge-growth {
        display: none;
    }
    .card-grid.four, .card-grid.three, .field-grid, .footer-grid {
        grid-template-columns: 1fr;
    }
    .carousel-arrow {
        display: none;
    }
}
"#;

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn setup_runs_a_single_time() {
        let once = Once::new();
        let calls = Cell::new(0);
        for _ in 0..3 {
            run_once(&once, || calls.set(calls.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn stylesheet_carries_the_blob_animation() {
        assert!(SITE_CSS.contains("@keyframes blob"));
        assert!(SITE_CSS.contains(".animate-blob"));
        assert!(SITE_CSS.contains(".animation-delay-2000"));
        assert!(SITE_CSS.contains(".animation-delay-4000"));
    }
}
