//! Default reading theme for rendered lessons.
//!
//! Every rule is scoped under [`CONTAINER_CLASS`] so the fragment can be
//! dropped into any page without restyling its surroundings.

/// Class of the element that wraps a rendered fragment.
pub const CONTAINER_CLASS: &str = "skillmark";

/// Dark reading theme for headings, prose, lists, links and code.
pub const STYLESHEET: &str = r#".skillmark {
  display: block;
  color: #d1d5db;
  line-height: 1.75;
  font-size: 1rem;
  max-width: 100%;
  overflow-wrap: break-word;
}
.skillmark h1 {
  font-size: 1.875rem;
  font-weight: 800;
  color: #67e8f9;
  margin-top: 3rem;
  margin-bottom: 1.5rem;
  padding-bottom: 1rem;
  border-bottom: 2px solid #475569;
}
.skillmark h2 {
  font-size: 1.5rem;
  font-weight: 700;
  color: #5eead4;
  margin-top: 2.5rem;
  margin-bottom: 1.25rem;
  padding-bottom: 0.75rem;
  border-bottom: 1px solid #475569;
}
.skillmark h3 {
  font-size: 1.375rem;
  font-weight: 700;
  color: #a5f3fc;
  margin-top: 2rem;
  margin-bottom: 1rem;
  padding-bottom: 0.5rem;
  border-bottom: 1px solid #475569;
}
.skillmark h1:first-child,
.skillmark h2:first-child,
.skillmark h3:first-child {
  margin-top: 0;
}
.skillmark p {
  margin-bottom: 1.25rem;
  line-height: 1.8;
  word-break: break-word;
}
.skillmark p:last-child {
  margin-bottom: 0;
}
.skillmark strong {
  color: #f8fafc;
  font-weight: 600;
}
.skillmark em {
  color: #e2e8f0;
  font-style: italic;
}
.skillmark ul,
.skillmark ol {
  margin-left: 1.5rem;
  margin-bottom: 1.25rem;
  padding-left: 0.5rem;
}
.skillmark ul {
  list-style-type: disc;
}
.skillmark ol {
  list-style-type: decimal;
}
.skillmark li {
  margin-bottom: 0.5rem;
}
.skillmark li::marker {
  color: #60a5fa;
}
.skillmark a {
  color: #60a5fa;
  text-decoration: underline;
  text-decoration-color: rgba(96, 165, 250, 0.4);
  text-underline-offset: 2px;
  word-break: break-all;
}
.skillmark a:hover {
  color: #93c5fd;
}
.skillmark code.inline-code {
  background-color: #1e293b;
  color: #fbbf24;
  padding: 0.125rem 0.375rem;
  border-radius: 0.25rem;
  border: 1px solid #334155;
  font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace;
  font-size: 0.875rem;
  white-space: pre-wrap;
}
.skillmark pre {
  background-color: #0f172a;
  color: #cbd5e1;
  padding: 1.25rem;
  border-radius: 0.5rem;
  border: 1px solid #334155;
  overflow-x: auto;
  font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace;
  font-size: 0.9rem;
  line-height: 1.6;
  margin: 1.5rem 0;
}
.skillmark pre code {
  font-family: inherit;
}
"#;
