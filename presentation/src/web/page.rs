//! The single-page dashboard.
//!
//! The page is static markup plus a small script; every number it shows is
//! fetched from the JSON API, so the template only needs the two model names.

use duel_domain::Model;
use minijinja::{AutoEscape, Environment, context};

const TEMPLATE_NAME: &str = "dashboard.html";

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Math Model Evaluation Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
<script src="https://cdn.jsdelivr.net/npm/marked@14.1.3/marked.min.js"></script>
<script src="https://cdn.jsdelivr.net/npm/dompurify@3.1.7/dist/purify.min.js"></script>
<style>
  body { font-family: sans-serif; margin: 2rem auto; max-width: 1200px; padding: 0 1rem; color: #262730; }
  nav button { border: none; background: none; padding: .6rem 1rem; cursor: pointer; font-size: 1rem; }
  nav button.active { border-bottom: 3px solid #ff4b4b; font-weight: bold; }
  nav.subjects button { font-size: .9rem; }
  section[hidden] { display: none; }
  table { border-collapse: collapse; width: 100%; }
  th, td { border: 1px solid #e6e9ef; padding: .4rem .6rem; text-align: left; }
  .columns { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
  .answer pre { white-space: pre-wrap; }
  .failed { color: #b00020; }
  .elapsed { font-style: italic; }
  .warning { background: #fffce7; border: 1px solid #f5d90a; padding: .6rem; }
  footer { margin-top: 3rem; border-top: 1px solid #e6e9ef; padding-top: 1rem; }
</style>
</head>
<body>
<h1>Math Model Evaluation Dashboard</h1>

<nav class="tabs">
  <button data-tab="performance" class="active">Subject Performance</button>
  <button data-tab="analysis">Detailed Analysis</button>
  <button data-tab="try">Try Models</button>
</nav>

<section id="performance">
  <h2>Performance Across Subjects</h2>
  <div id="subject-chart"></div>
  <h2>Overall Performance Metrics</h2>
  <div id="overall-table"></div>
  <div id="overall-radar"></div>
</section>

<section id="analysis" hidden>
  <nav class="subjects" id="subject-tabs"></nav>
  <div class="columns">
    <div id="detail-table"></div>
    <div id="detail-radar"></div>
  </div>
  <div id="detail-bar"></div>
</section>

<section id="try" hidden>
  <h2>Try the Models</h2>
  <p>Enter a mathematics question to see how both models would respond</p>
  <label for="question">Enter your mathematics question:</label><br>
  <textarea id="question" rows="5" style="width:100%"></textarea><br>
  <button id="submit">Submit Question</button>
  <p id="status"></p>
  <div class="columns" id="results" hidden>
    <div><h3>{{ cloud_name }} Response</h3><div id="cloud-answer" class="answer"></div><p id="cloud-elapsed" class="elapsed"></p></div>
    <div><h3>{{ local_name }} Response</h3><div id="local-answer" class="answer"></div><p id="local-elapsed" class="elapsed"></p></div>
  </div>
</section>

<footer>Dashboard created to visualize model evaluation results and compare model performance</footer>

<script>
const CLOUD = {{ cloud_name|tojson }};
const LOCAL = {{ local_name|tojson }};

function showTab(name) {
  document.querySelectorAll("nav.tabs button").forEach(b => b.classList.toggle("active", b.dataset.tab === name));
  document.querySelectorAll("body > section").forEach(s => s.hidden = s.id !== name);
}
document.querySelectorAll("nav.tabs button").forEach(b => b.addEventListener("click", () => showTab(b.dataset.tab)));

function renderTable(target, table, title) {
  const el = document.getElementById(target);
  el.replaceChildren();
  if (title) { const h = document.createElement("h3"); h.textContent = title; el.appendChild(h); }
  const t = document.createElement("table");
  const head = t.insertRow();
  ["Metric", CLOUD, LOCAL, "Difference"].forEach(text => { const th = document.createElement("th"); th.textContent = text; head.appendChild(th); });
  table.rows.forEach(row => {
    const tr = t.insertRow();
    [row.metric, row.cloud, row.local, row.difference].forEach(text => { tr.insertCell().textContent = text; });
  });
  el.appendChild(t);
}

function renderRadar(target, series, title) {
  Plotly.newPlot(target, [
    { type: "scatterpolar", r: series.cloud, theta: series.metrics, fill: "toself", name: CLOUD },
    { type: "scatterpolar", r: series.local, theta: series.metrics, fill: "toself", name: LOCAL },
  ], { polar: { radialaxis: { visible: true, range: [0, 1] } }, showlegend: true, title: title });
}

function renderBar(target, x, cloud, local, title, xTitle, angle) {
  Plotly.newPlot(target, [
    { type: "bar", name: CLOUD, x: x, y: cloud },
    { type: "bar", name: LOCAL, x: x, y: local },
  ], { title: title, xaxis: { title: xTitle, tickangle: angle }, yaxis: { title: "Score" }, barmode: "group" });
}

function showSubject(table) {
  document.querySelectorAll("#subject-tabs button").forEach(b => b.classList.toggle("active", b.dataset.subject === table.subject));
  renderTable("detail-table", table, table.title + " Metrics");
  renderRadar("detail-radar", table.radar, table.title + " Performance Radar");
  renderBar("detail-bar", table.bar.metrics, table.bar.cloud, table.bar.local, table.title + " Performance Comparison", "Metrics", -45);
}

async function loadDashboard() {
  const subjects = await (await fetch("/api/subjects")).json();
  renderBar("subject-chart", subjects.map(s => s.title), subjects.map(s => s.cloud), subjects.map(s => s.local), "Model Performance by Subject", "Subject", 0);

  const tables = await (await fetch("/api/metrics")).json();
  const overall = tables.find(t => t.subject === "overall");
  if (overall) {
    renderTable("overall-table", overall, "");
    renderRadar("overall-radar", overall.radar, "Overall Performance Radar");
  }

  const nav = document.getElementById("subject-tabs");
  const categories = tables.filter(t => t.subject !== "overall");
  categories.forEach(table => {
    const b = document.createElement("button");
    b.textContent = table.title;
    b.dataset.subject = table.subject;
    b.addEventListener("click", () => showSubject(table));
    nav.appendChild(b);
  });
  if (categories.length > 0) { showSubject(categories[0]); }
}

function renderMarkdown(el, text) {
  if (window.marked && window.DOMPurify) {
    el.innerHTML = DOMPurify.sanitize(marked.parse(text));
  } else {
    el.textContent = text;
  }
}

function showAnswer(side, response) {
  const answer = document.getElementById(side + "-answer");
  renderMarkdown(answer, response.text);
  answer.classList.toggle("failed", !response.succeeded);
  document.getElementById(side + "-elapsed").textContent = "Response time: " + response.elapsed_display + " seconds";
}

document.getElementById("submit").addEventListener("click", async () => {
  const status = document.getElementById("status");
  const results = document.getElementById("results");
  const question = document.getElementById("question").value;
  status.className = "";
  if (question.trim() === "") {
    status.textContent = "Please enter a question first.";
    status.className = "warning";
    return;
  }
  results.hidden = true;
  status.textContent = "Getting responses from both models...";
  let res, body;
  try {
    res = await fetch("/api/compare", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ question: question }),
    });
    body = await res.json();
  } catch (err) {
    status.textContent = "Request failed: " + err.message;
    status.className = "warning";
    return;
  }
  if (!res.ok) {
    status.textContent = body.error;
    status.className = "warning";
    return;
  }
  status.textContent = "";
  showAnswer("cloud", body.cloud);
  showAnswer("local", body.local);
  results.hidden = false;
});

loadDashboard();
</script>
</body>
</html>
"##;

/// Render the dashboard page for the configured pair of models.
///
/// Names are HTML-escaped in markup and JSON-encoded inside the script.
pub fn render(cloud: &Model, local: &Model) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;

    env.get_template(TEMPLATE_NAME)?.render(context!(
        cloud_name => cloud.display_name(),
        local_name => local.display_name(),
    ))
}
