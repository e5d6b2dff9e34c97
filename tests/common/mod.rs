//! Scripted in-memory transport for driving `LmsClient` without a network.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pknulms::transport::{Form, PortalResponse, Transport};
use pknulms::{Config, LmsClient, LmsError, Result};

/// A request seen by the [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: &'static str,
    pub url: String,
    pub form: Vec<(String, String)>,
}

impl Recorded {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Replays queued outcomes in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<PortalResponse>>>,
    requests: Mutex<Vec<Recorded>>,
}

impl ScriptedTransport {
    pub fn new(responses: impl IntoIterator<Item = Result<PortalResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn reply(&self, recorded: Recorded) -> Result<PortalResponse> {
        let url = recorded.url.clone();
        self.requests.lock().unwrap().push(recorded);
        let response = self.responses.lock().unwrap().pop_front();
        response.unwrap_or_else(|| panic!("no scripted response left for {url}"))
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_form(&self, url: &str, form: &Form) -> Result<PortalResponse> {
        self.reply(Recorded {
            method: "POST",
            url: url.to_string(),
            form: form
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
        })
    }

    async fn get(&self, url: &str) -> Result<PortalResponse> {
        self.reply(Recorded {
            method: "GET",
            url: url.to_string(),
            form: Vec::new(),
        })
    }
}

pub fn client(
    responses: impl IntoIterator<Item = Result<PortalResponse>>,
) -> LmsClient<ScriptedTransport> {
    LmsClient::with_transport(
        ScriptedTransport::new(responses),
        Arc::new(Config::default()),
    )
}

pub fn ok(body: &str) -> Result<PortalResponse> {
    status(200, body)
}

pub fn status(code: u16, body: &str) -> Result<PortalResponse> {
    Ok(PortalResponse::new(code, body))
}

/// A transport-level failure, as reqwest reports an unusable request.
pub fn transport_error() -> Result<PortalResponse> {
    let error = reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err();
    Err(LmsError::Http(error))
}

/// A listing fragment with one notice and one assignment entry.
pub const LISTING: &str = r##"
<div class="resultBox">
  <ul>
    <li><img src="/ilos/images/main/icon_notice.png" alt=""></li>
    <li>
      <em class="sub_open">
        <a class="site-link" href="/ilos/st/course/notice_view.acl?ARTL_NUM=4821"
           onclick="eclassRoom('notice', 'A20241CS1011', 'notice_list_form');return false;">공지: 중간고사 일정 안내</a>
      </em>
      <span>2024.04.15 오전 10:30</span>
      <span>중간고사는 4월 22일에 진행됩니다.</span>
      <div class="info"><a href="#">홍길동</a> <a href="#">자료구조</a></div>
    </li>
  </ul>
  <ul>
    <li><img src="/ilos/images/main/icon_report.png" alt=""></li>
    <li>
      <em class="sub_open">
        <a class="site-link" href="/ilos/st/course/report_view.acl?RT_SEQ=51234"
           onclick="eclassRoom('report', 'A20241CS2002', 'report_list_form');return false;">과제: Homework 3</a>
      </em>
      <span>미제출 | 마감일(2024-05-01)</span>
      <span>Implement a binary search tree.</span>
      <div class="info"><a href="#">김교수</a> <a href="#">알고리즘</a></div>
    </li>
  </ul>
</div>
"##;
