mod common;
pub use self::common::{RowStatus, UNKNOWN_ID};

mod actuator;
pub use self::actuator::ActuatorInfo;

mod setting;
pub use self::setting::{Setting, SettingName};

mod plan;
pub use self::plan::{Plan, PlanType};

mod principal;
pub use self::principal::{Principal, PrincipalId, PrincipalType, RoleType};

mod environment;
pub use self::environment::{
    DataSource, DataSourceId, DataSourceType, Database, DatabaseId, Environment, EnvironmentId,
    Instance, InstanceId,
};

mod project;
pub use self::project::{
    MemberId, Project, ProjectCreate, ProjectId, ProjectMember, ProjectMemberCreate,
    ProjectMemberPatch, ProjectPatch, ProjectRoleType, ProjectVisibility, ProjectWorkflowType,
    DEFAULT_PROJECT_ID,
};

mod issue;
pub use self::issue::{IssueCreate, PipelineCreate, StageCreate, TaskCreate, TaskStatus};
