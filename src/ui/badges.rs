//! Colour coding for statuses, sources, stages and scores

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use sellertui::api::{LeadSource, LeadStatus, OpportunityStage};
use sellertui::logic::formatting::{format_score, score_band, ScoreBand};

pub fn status_color(status: LeadStatus) -> Color {
    match status {
        LeadStatus::New => Color::Blue,
        LeadStatus::Contacted => Color::Yellow,
        LeadStatus::Qualified => Color::Green,
        LeadStatus::Unqualified => Color::Gray,
        LeadStatus::Lost => Color::Red,
    }
}

pub fn source_color(source: LeadSource) -> Color {
    match source {
        LeadSource::Website => Color::Magenta,
        LeadSource::LinkedIn => Color::Blue,
        LeadSource::ColdCall => Color::LightRed,
        LeadSource::Referral => Color::Green,
        LeadSource::EmailCampaign => Color::LightMagenta,
        LeadSource::TradeShow => Color::Cyan,
    }
}

pub fn stage_color(stage: OpportunityStage) -> Color {
    match stage {
        OpportunityStage::Prospecting => Color::Blue,
        OpportunityStage::Qualification => Color::Cyan,
        OpportunityStage::Proposal => Color::Yellow,
        OpportunityStage::Negotiation => Color::Magenta,
        OpportunityStage::ClosedWon => Color::Green,
        OpportunityStage::ClosedLost => Color::Red,
    }
}

pub fn score_color(score: u8) -> Color {
    match score_band(score) {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Blue,
        ScoreBand::Fair => Color::Yellow,
        ScoreBand::Low => Color::Red,
    }
}

fn badge(text: String, color: Color) -> Span<'static> {
    Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

pub fn status_badge(status: LeadStatus) -> Span<'static> {
    badge(status.to_string(), status_color(status))
}

pub fn source_badge(source: LeadSource) -> Span<'static> {
    badge(source.to_string(), source_color(source))
}

pub fn stage_badge(stage: OpportunityStage) -> Span<'static> {
    badge(stage.to_string(), stage_color(stage))
}

pub fn score_badge(score: u8) -> Span<'static> {
    badge(format_score(score), score_color(score))
}
