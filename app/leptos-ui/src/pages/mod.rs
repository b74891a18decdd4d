pub mod conference_detail;
pub mod conferences;
pub mod keynotes;
pub mod loading;
