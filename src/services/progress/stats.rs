use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProgressService;
use crate::models::progress::entities::{Progress, ProgressStatus};
use crate::models::progress::responses::ProgressStatsResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 某学生的进度统计
///
/// 每次从原始进度行现算，结果确定，无缓存聚合。
pub async fn get_stats(
    service: &ProgressService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = super::extract_claims(request) else {
        return Ok(super::unauthorized_response());
    };

    let storage = service.get_storage(request);

    if let Err(response) = super::check_read_access(&storage, &user, student_id).await {
        return Ok(response);
    }

    let rows = match storage.list_progress_for_user(student_id).await {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取进度统计失败: {e}"),
                )),
            );
        }
    };

    let total_active_lessons = match storage.count_active_lessons().await {
        Ok(count) => count,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取进度统计失败: {e}"),
                )),
            );
        }
    };

    let stats = compute_stats(&rows, total_active_lessons);
    Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "获取进度统计成功")))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 从进度行计算统计值
///
/// 完成率分母是当前活跃课程总数；平均分只取已完成且有分数的行。
pub fn compute_stats(rows: &[Progress], total_active_lessons: i64) -> ProgressStatsResponse {
    let completed: Vec<&Progress> = rows
        .iter()
        .filter(|p| p.status == ProgressStatus::Completed)
        .collect();
    let in_progress = rows
        .iter()
        .filter(|p| p.status == ProgressStatus::InProgress)
        .count() as i64;

    let completion_rate = if total_active_lessons > 0 {
        round2(completed.len() as f64 / total_active_lessons as f64 * 100.0)
    } else {
        0.0
    };

    let scores: Vec<f64> = completed.iter().filter_map(|p| p.score).collect();
    let average_score = if scores.is_empty() {
        None
    } else {
        Some(round2(scores.iter().sum::<f64>() / scores.len() as f64))
    };

    ProgressStatsResponse {
        total_lessons: total_active_lessons,
        completed_lessons: completed.len() as i64,
        in_progress_lessons: in_progress,
        completion_rate,
        average_score,
        total_time_spent: rows.iter().map(|p| p.time_spent).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(status: ProgressStatus, score: Option<f64>, time_spent: i64) -> Progress {
        let now = chrono::Utc::now();
        Progress {
            id: 0,
            user_id: 1,
            lesson_id: 1,
            status,
            score,
            time_spent,
            notes: None,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_stats_over_mixed_rows() {
        let rows = vec![
            progress(ProgressStatus::Completed, Some(90.0), 30),
            progress(ProgressStatus::Completed, Some(70.0), 45),
            progress(ProgressStatus::Completed, None, 10),
            progress(ProgressStatus::InProgress, None, 15),
            progress(ProgressStatus::NotStarted, None, 0),
        ];

        let stats = compute_stats(&rows, 6);
        assert_eq!(stats.total_lessons, 6);
        assert_eq!(stats.completed_lessons, 3);
        assert_eq!(stats.in_progress_lessons, 1);
        assert_eq!(stats.completion_rate, 50.0);
        // 没有分数的已完成行不计入平均分
        assert_eq!(stats.average_score, Some(80.0));
        assert_eq!(stats.total_time_spent, 100);
    }

    #[test]
    fn test_stats_rounding() {
        let rows = vec![
            progress(ProgressStatus::Completed, Some(85.0), 0),
            progress(ProgressStatus::Completed, Some(90.5), 0),
            progress(ProgressStatus::Completed, Some(78.0), 0),
        ];

        let stats = compute_stats(&rows, 7);
        assert_eq!(stats.completion_rate, 42.86);
        assert_eq!(stats.average_score, Some(84.5));
    }

    #[test]
    fn test_stats_empty_rows() {
        let stats = compute_stats(&[], 0);
        assert_eq!(stats.completed_lessons, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.average_score, None);
        assert_eq!(stats.total_time_spent, 0);
    }

    #[test]
    fn test_stats_deterministic() {
        let rows = vec![
            progress(ProgressStatus::Completed, Some(60.0), 20),
            progress(ProgressStatus::InProgress, None, 5),
        ];
        assert_eq!(compute_stats(&rows, 3), compute_stats(&rows, 3));
    }
}
