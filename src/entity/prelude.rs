//! 预导入模块，方便使用

pub use super::achievements::{
    ActiveModel as AchievementActiveModel, Entity as Achievements, Model as AchievementModel,
};
pub use super::assignment_assignees::{
    ActiveModel as AssignmentAssigneeActiveModel, Entity as AssignmentAssignees,
    Model as AssignmentAssigneeModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::lessons::{
    ActiveModel as LessonActiveModel, Entity as Lessons, Model as LessonModel,
};
pub use super::messages::{
    ActiveModel as MessageActiveModel, Entity as Messages, Model as MessageModel,
};
pub use super::progress::{
    ActiveModel as ProgressActiveModel, Entity as ProgressRows, Model as ProgressModel,
};
pub use super::student_parents::{
    ActiveModel as StudentParentActiveModel, Entity as StudentParents, Model as StudentParentModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
